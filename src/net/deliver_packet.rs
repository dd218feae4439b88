//! 数据包交付事件

use super::id::NodeId;
use super::net_world::NetWorld;
use super::packet::Packet;
use crate::sim::{Event, Simulator, World};
use tracing::{debug, warn};

/// 事件：packet 经过传播时延后到达某个设备。
#[derive(Debug)]
pub struct DeliverPacket {
    pub to: NodeId,
    pub pkt: Packet,
}

impl Event for DeliverPacket {
    #[tracing::instrument(skip(self, sim, world), fields(pkt_id = self.pkt.id, flow_id = self.pkt.flow_id, to = ?self.to))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverPacket { to, pkt } = *self;
        debug!(now = ?sim.now(), dst = ?pkt.dst(), hop = pkt.hop, "📨 数据包到达节点");

        let Some(w) = world.as_any_mut().downcast_mut::<NetWorld>() else {
            warn!("world is not a NetWorld, packet lost");
            return;
        };
        w.net.deliver(to, pkt, sim);
    }
}
