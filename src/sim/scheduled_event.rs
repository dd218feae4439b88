//! 事件队列条目

use super::event::Event;
use super::time::SimTime;
use std::cmp::Ordering;

/// 已调度的事件。`seq` 在调度时分配，同一时刻的事件按调度先后执行，
/// 因此同一纳秒内多个端口的发送完成事件顺序是确定的。
pub(crate) struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) seq: u64,
    pub(crate) ev: Box<dyn Event>,
}

impl ScheduledEvent {
    fn key(&self) -> (SimTime, u64) {
        (self.at, self.seq)
    }
}

// BinaryHeap 弹出最大值，反向比较使最早的 (at, seq) 先出队
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledEvent {}
