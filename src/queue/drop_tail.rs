//! DropTail（尾丢弃）队列
//!
//! 当队列容量不足时，直接丢弃新到达的 packet。

use std::collections::VecDeque;

use crate::net::Packet;

use super::PacketQueue;

#[derive(Debug)]
pub struct DropTailQueue {
    max_bits: u64,
    cur_bits: u64,
    q: VecDeque<Packet>,
}

impl DropTailQueue {
    pub fn new(max_bits: u64) -> Self {
        Self {
            max_bits,
            cur_bits: 0,
            q: VecDeque::new(),
        }
    }
}

impl PacketQueue for DropTailQueue {
    fn offer(&mut self, pkt: Packet) -> Vec<Packet> {
        if self.cur_bits.saturating_add(pkt.size_bits) > self.max_bits {
            return vec![pkt];
        }
        self.cur_bits += pkt.size_bits;
        self.q.push_back(pkt);
        Vec::new()
    }

    fn dequeue(&mut self) -> Option<Packet> {
        let pkt = self.q.pop_front()?;
        self.cur_bits -= pkt.size_bits;
        Some(pkt)
    }

    fn len(&self) -> usize {
        self.q.len()
    }

    fn occupied_bits(&self) -> u64 {
        self.cur_bits
    }

    fn capacity_bits(&self) -> u64 {
        self.max_bits
    }
}
