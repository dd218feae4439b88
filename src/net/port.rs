//! 输出端口（egress port）
//!
//! 一个端口对应 (源设备, 目标设备, 链路) 三元组，拥有一个队列。
//! 链路空闲时到达的包直接发送；链路忙时交给队列，由队列决定丢弃谁。
//! 每次发送完成事件触发时，从队列取下一个包继续发送，队列空则链路转为空闲。

use super::id::{NodeId, PortId};
use super::link::Link;
use super::link_state::LinkState;
use super::packet::Packet;
use super::packet_dispatched::TxScheduler;
use crate::queue::PacketQueue;
use crate::stats::{account_drop, StatsSink};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct OutputPort {
    id: PortId,
    own: NodeId,
    target: NodeId,
    link: Link,
    state: LinkState,
    /// 始终等于队列中驻留包的 bit 总和
    buffer_occupied_bits: u64,
    queue: Box<dyn PacketQueue>,
}

impl OutputPort {
    pub fn new(
        id: PortId,
        own: NodeId,
        target: NodeId,
        link: Link,
        queue: Box<dyn PacketQueue>,
    ) -> Self {
        Self {
            id,
            own,
            target,
            link,
            state: LinkState::Idle,
            buffer_occupied_bits: 0,
            queue,
        }
    }

    pub fn id(&self) -> PortId {
        self.id
    }

    pub fn own_id(&self) -> NodeId {
        self.own
    }

    pub fn target_id(&self) -> NodeId {
        self.target
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state.is_sending()
    }

    pub fn buffer_occupied_bits(&self) -> u64 {
        self.buffer_occupied_bits
    }

    pub fn queue(&self) -> &dyn PacketQueue {
        self.queue.as_ref()
    }

    /// 包到达端口
    #[tracing::instrument(skip(self, pkt, sched, sink), fields(port = self.id.0, pkt_id = pkt.id, rank = pkt.rank))]
    pub fn enqueue(&mut self, pkt: Packet, sched: &mut dyn TxScheduler, sink: &mut dyn StatsSink) {
        if !self.state.is_sending() {
            // 链路空闲意味着队列为空，直接发送
            sink.log_link_utilized(self.id, sched.now(), true);
            if sink.packet_tracing_enabled() {
                sink.log_packet_trace(format!(
                    "Time: {} => Packet sent (no queue): {}",
                    sched.now().0,
                    pkt.trace_fields()
                ));
            }
            self.dispatch(pkt, sched);
            self.state = LinkState::Busy;
            return;
        }

        if sink.packet_tracing_enabled() {
            sink.log_packet_trace(format!(
                "Time: {} => Packet enqueued: {}",
                sched.now().0,
                pkt.trace_fields()
            ));
        }

        let size_bits = pkt.size_bits;
        let dropped = self.queue.offer(pkt);
        // 入队与每个丢包各上报一次，入队那次采样可能短暂超过容量
        self.buffer_occupied_bits += size_bits;
        sink.log_queue_state(self.id, self.queue.len(), self.buffer_occupied_bits);

        for d in &dropped {
            self.buffer_occupied_bits -= d.size_bits;
            sink.log_queue_state(self.id, self.queue.len(), self.buffer_occupied_bits);
            account_drop(self.own, d, sink);
        }
        debug_assert_eq!(self.buffer_occupied_bits, self.queue.occupied_bits());
        debug!(
            queue_len = self.queue.len(),
            occupied_bits = self.buffer_occupied_bits,
            "入队完成"
        );
    }

    /// 上一个包发送完成：取队首继续发送，或转为空闲
    #[tracing::instrument(skip(self, sched, sink), fields(port = self.id.0))]
    pub fn on_transmission_complete(&mut self, sched: &mut dyn TxScheduler, sink: &mut dyn StatsSink) {
        debug_assert!(self.state.is_sending(), "completion on an idle link");

        match self.queue.dequeue() {
            Some(pkt) => {
                self.buffer_occupied_bits -= pkt.size_bits;
                sink.log_queue_state(self.id, self.queue.len(), self.buffer_occupied_bits);
                if sink.packet_tracing_enabled() {
                    sink.log_packet_trace(format!(
                        "Time: {} => Packet sent (from queue): {}",
                        sched.now().0,
                        pkt.trace_fields()
                    ));
                }
                self.dispatch(pkt, sched);
            }
            None => {
                self.state = LinkState::Idle;
                sink.log_link_utilized(self.id, sched.now(), false);
                trace!("链路空闲");
            }
        }
    }

    fn dispatch(&self, pkt: Packet, sched: &mut dyn TxScheduler) {
        let tx_time = self.link.tx_time(pkt.size_bits);
        let done = sched.now().after(tx_time.0);
        trace!(pkt_id = pkt.id, ?tx_time, ?done, "开始发送");
        sched.schedule_dispatch(done, self.id, pkt);
    }
}
