//! 发送完成事件
//!
//! 端口通过 [`TxScheduler`] 登记“packet 的最后一个 bit 离开链路”的时刻；
//! 事件触发时网络先把 packet 交给链路另一端，再让端口取下一个包。

use super::id::PortId;
use super::net_world::NetWorld;
use super::packet::Packet;
use crate::sim::{Event, SimTime, Simulator, World};
use tracing::warn;

/// 端口调度发送完成事件所用的接口
pub trait TxScheduler {
    fn now(&self) -> SimTime;
    fn schedule_dispatch(&mut self, at: SimTime, port: PortId, pkt: Packet);
}

impl TxScheduler for Simulator {
    fn now(&self) -> SimTime {
        Simulator::now(self)
    }

    fn schedule_dispatch(&mut self, at: SimTime, port: PortId, pkt: Packet) {
        self.schedule(at, PacketDispatched { port, pkt });
    }
}

/// 事件：端口完成一次序列化发送
#[derive(Debug)]
pub struct PacketDispatched {
    pub port: PortId,
    pub pkt: Packet,
}

impl Event for PacketDispatched {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let PacketDispatched { port, pkt } = *self;
        let Some(w) = world.as_any_mut().downcast_mut::<NetWorld>() else {
            warn!(port = port.0, "world is not a NetWorld, dispatch ignored");
            return;
        };
        w.net.on_dispatched(port, pkt, sim);
    }
}
