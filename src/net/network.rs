//! 网络拓扑管理
//!
//! 持有设备、输出端口和统计；负责把包交给下一跳端口，以及发送完成后的传播与交付。

use std::collections::HashMap;

use super::deliver_packet::DeliverPacket;
use super::error::NetError;
use super::id::{NodeId, PortId};
use super::link::Link;
use super::node::{Device, DeviceKind};
use super::packet::Packet;
use super::port::OutputPort;
use super::stats::Stats;
use crate::queue::PacketQueue;
use crate::sim::Simulator;
use crate::stats::{SimLogger, StatsSink, PACKETS_DELIVERED, PACKETS_UNROUTABLE};
use tracing::{debug, info, warn};

/// 网络拓扑
#[derive(Default)]
pub struct Network {
    devices: Vec<Device>,
    ports: Vec<OutputPort>,
    edges: HashMap<(NodeId, NodeId), PortId>,
    next_pkt_id: u64,
    pub stats: Stats,
    pub logger: SimLogger,
}

impl Network {
    /// 使用给定的统计 sink 创建网络
    pub fn with_logger(logger: SimLogger) -> Self {
        Self {
            logger,
            ..Self::default()
        }
    }

    pub fn add_host(&mut self, name: impl Into<String>) -> NodeId {
        self.add_device(name.into(), DeviceKind::Host)
    }

    pub fn add_switch(&mut self, name: impl Into<String>) -> NodeId {
        self.add_device(name.into(), DeviceKind::Switch)
    }

    fn add_device(&mut self, name: String, kind: DeviceKind) -> NodeId {
        let id = NodeId(self.devices.len());
        self.devices.push(Device { id, name, kind });
        id
    }

    pub fn device(&self, id: NodeId) -> Option<&Device> {
        self.devices.get(id.0)
    }

    /// 连接两个设备（创建单向输出端口）
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
        link: Link,
        queue: Box<dyn PacketQueue>,
    ) -> Result<PortId, NetError> {
        for node in [from, to] {
            if self.device(node).is_none() {
                return Err(NetError::UnknownNode(node));
            }
        }
        let id = PortId(self.ports.len());
        self.ports.push(OutputPort::new(id, from, to, link, queue));
        self.edges.insert((from, to), id);
        Ok(id)
    }

    pub fn port(&self, id: PortId) -> Option<&OutputPort> {
        self.ports.get(id.0)
    }

    pub fn port_between(&self, from: NodeId, to: NodeId) -> Result<PortId, NetError> {
        self.edges
            .get(&(from, to))
            .copied()
            .ok_or(NetError::NoPort { from, to })
    }

    pub fn ports(&self) -> impl Iterator<Item = &OutputPort> {
        self.ports.iter()
    }

    /// 创建数据包；`path` 为 src 之后依次经过的节点
    pub fn make_packet(
        &mut self,
        flow_id: u64,
        size_bits: u64,
        rank: u64,
        src: NodeId,
        path: Vec<NodeId>,
    ) -> Packet {
        let id = self.next_pkt_id;
        self.next_pkt_id = self.next_pkt_id.wrapping_add(1);
        Packet::new(id, flow_id, size_bits, rank, src, path)
    }

    /// 包到达设备：到达目的地则记为送达，否则继续转发
    pub fn deliver(&mut self, to: NodeId, pkt: Packet, sim: &mut Simulator) {
        if pkt.dst() == to {
            self.on_delivered(pkt);
        } else {
            self.send_from(to, pkt, sim);
        }
    }

    /// 从指定设备把包交给通往下一跳的输出端口
    #[tracing::instrument(skip(self, pkt, sim), fields(pkt_id = pkt.id, from = ?from, hop = pkt.hop))]
    pub fn send_from(&mut self, from: NodeId, pkt: Packet, sim: &mut Simulator) {
        let port = pkt
            .next()
            .ok_or(NetError::NoNextHop { pkt_id: pkt.id })
            .and_then(|to| self.port_between(from, to));
        match port {
            Ok(id) => {
                debug!(port = id.0, "🚀 交给输出端口");
                self.ports[id.0].enqueue(pkt, sim, &mut self.logger);
            }
            Err(err) => {
                warn!(%err, "无法转发，丢弃");
                self.logger.increment_counter(PACKETS_UNROUTABLE);
            }
        }
    }

    /// 端口发送完成：包经传播时延到达目标设备，端口继续发送队列中的下一个包
    pub fn on_dispatched(&mut self, port: PortId, pkt: Packet, sim: &mut Simulator) {
        let Some(p) = self.ports.get_mut(port.0) else {
            warn!(port = port.0, "unknown port, dispatch ignored");
            return;
        };
        let arrive = sim.now().after(p.link().latency.0);
        sim.schedule(
            arrive,
            DeliverPacket {
                to: p.target_id(),
                pkt: pkt.advance(),
            },
        );
        p.on_transmission_complete(sim, &mut self.logger);
    }

    #[tracing::instrument(skip(self, pkt), fields(pkt_id = pkt.id, flow_id = pkt.flow_id))]
    fn on_delivered(&mut self, pkt: Packet) {
        debug!("✅ 数据包送达目的地");
        self.stats.delivered_pkts += 1;
        self.stats.delivered_bits += pkt.size_bits;
        self.logger.increment_counter(PACKETS_DELIVERED);
        match pkt.as_classified_transport().map(|h| h.urg) {
            Some(true) => self.stats.delivered_malicious_pkts += 1,
            Some(false) => self.stats.delivered_benign_pkts += 1,
            None => {}
        }
        if self.stats.delivered_pkts % 10_000 == 0 {
            info!(delivered_pkts = self.stats.delivered_pkts, "送达进度");
        }
    }
}
