//! 队列策略（Queue disciplines）
//!
//! 端口通过 [`PacketQueue`] 持有队列，不依赖具体实现：
//! - [`PifoQueue`]：按 rank 出队，拥塞时挤出 rank 最差的驻留包
//! - [`DropTailQueue`]：FIFO，满则丢弃新到达的包
//!
//! 容量以 bit 计。

use crate::net::Packet;
use serde::Deserialize;

mod drop_tail;
mod pifo;

pub use drop_tail::DropTailQueue;
pub use pifo::PifoQueue;

/// Packet 队列抽象
pub trait PacketQueue: std::fmt::Debug {
    /// 入队。返回本次入队导致丢弃的全部 packet：
    /// 为空表示无丢包；可能包含到达包本身（被拒绝）或被挤出的驻留包。
    fn offer(&mut self, pkt: Packet) -> Vec<Packet>;
    /// 出队：按队列策略返回下一个 packet
    fn dequeue(&mut self) -> Option<Packet>;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn occupied_bits(&self) -> u64;
    fn capacity_bits(&self) -> u64;
}

/// 可配置的队列策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    #[default]
    Pifo,
    DropTail,
}

impl QueueKind {
    pub fn build(self, capacity_bits: u64) -> Box<dyn PacketQueue> {
        match self {
            QueueKind::Pifo => Box::new(PifoQueue::new(capacity_bits)),
            QueueKind::DropTail => Box::new(DropTailQueue::new(capacity_bits)),
        }
    }
}
