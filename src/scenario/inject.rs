//! 流量注入事件
//!
//! 每次执行生成一个包交给源主机的输出端口，然后按间隔调度下一次注入。

use super::spec::FlowKind;
use crate::net::{NetWorld, NodeId, TcpHeader, Transport};
use crate::sim::{Event, Simulator, World};
use tracing::warn;

#[derive(Debug)]
pub struct InjectFlow {
    pub flow_id: u64,
    pub kind: FlowKind,
    pub src: NodeId,
    pub path: Vec<NodeId>,
    pub pkt_bits: u64,
    pub rank: u64,
    pub remaining: u64,
    pub gap_ns: u64,
    /// 下一个包的 TCP 序列号（字节）
    pub next_seq: u64,
}

impl InjectFlow {
    fn transport(&self) -> Transport {
        let header = |urg| {
            Transport::Tcp(TcpHeader {
                seq: self.next_seq,
                ack: 0,
                urg,
            })
        };
        match self.kind {
            FlowKind::Benign => header(false),
            FlowKind::Attack => header(true),
            FlowKind::Plain => Transport::None,
        }
    }
}

impl Event for InjectFlow {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let mut me = *self;
        if me.remaining == 0 {
            return;
        }
        let Some(w) = world.as_any_mut().downcast_mut::<NetWorld>() else {
            warn!(flow_id = me.flow_id, "world is not a NetWorld, flow stopped");
            return;
        };

        let pkt = w
            .net
            .make_packet(me.flow_id, me.pkt_bits, me.rank, me.src, me.path.clone())
            .with_transport(me.transport());
        w.net.send_from(me.src, pkt, sim);

        me.remaining -= 1;
        me.next_seq = me.next_seq.saturating_add(me.pkt_bits / 8);
        if me.remaining > 0 {
            let next_at = sim.now().after(me.gap_ns);
            sim.schedule(next_at, me);
        }
    }
}
