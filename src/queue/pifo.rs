//! PIFO (push-in, first-out) queue with rank-based eviction.
//!
//! Packets may be inserted at any rank; the lowest rank always leaves first,
//! earliest arrival first among equal ranks. When an arrival does not fit,
//! the worst candidate among the residents and the arrival is sacrificed.
//! An arrival ranked strictly worse than every resident is rejected and the
//! queue is left untouched. Otherwise residents are evicted worst rank first,
//! earliest arrival first among equals, until the arrival fits. A tie between
//! the arrival and the worst resident goes against the resident, which is
//! always the earlier of the two.

use std::collections::BTreeMap;

use tracing::trace;

use crate::net::Packet;

use super::PacketQueue;

/// Ordering key: `(rank, arrival sequence)`.
type Slot = (u64, u64);

#[derive(Debug)]
pub struct PifoQueue {
    max_bits: u64,
    cur_bits: u64,
    next_seq: u64,
    q: BTreeMap<Slot, Packet>,
}

impl PifoQueue {
    pub fn new(max_bits: u64) -> Self {
        Self {
            max_bits,
            cur_bits: 0,
            next_seq: 0,
            q: BTreeMap::new(),
        }
    }

    /// Ranks of resident packets in dequeue order.
    pub fn ranks(&self) -> Vec<u64> {
        self.q.keys().map(|&(rank, _)| rank).collect()
    }

    /// Pick the residents to evict so that `need_bits` are freed, walking
    /// ranks from worst to best and, within one rank, from earliest to latest
    /// arrival. `None` when the arrival itself is the worst candidate.
    fn victims(&self, rank: u64, need_bits: u64) -> Option<Vec<Slot>> {
        let &(worst_rank, _) = self.q.keys().next_back()?;
        if worst_rank < rank {
            return None;
        }

        let mut victims = Vec::new();
        let mut freed = 0u64;
        let mut next = Some(worst_rank);
        while let Some(r) = next {
            for (&slot, pkt) in self.q.range((r, 0)..=(r, u64::MAX)) {
                victims.push(slot);
                freed = freed.saturating_add(pkt.size_bits);
                if freed >= need_bits {
                    return Some(victims);
                }
            }
            next = self.q.range(..(r, 0)).next_back().map(|(&(r, _), _)| r);
        }
        // unreachable for arrivals that fit the capacity: an emptied queue always has room
        Some(victims)
    }

    fn insert(&mut self, pkt: Packet) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.cur_bits += pkt.size_bits;
        self.q.insert((pkt.rank, seq), pkt);
    }
}

impl PacketQueue for PifoQueue {
    fn offer(&mut self, pkt: Packet) -> Vec<Packet> {
        let needed = self.cur_bits.saturating_add(pkt.size_bits);
        if needed <= self.max_bits {
            self.insert(pkt);
            return Vec::new();
        }
        if pkt.size_bits > self.max_bits {
            trace!(pkt_id = pkt.id, size_bits = pkt.size_bits, "larger than the whole buffer");
            return vec![pkt];
        }

        let Some(victims) = self.victims(pkt.rank, needed - self.max_bits) else {
            trace!(pkt_id = pkt.id, rank = pkt.rank, "arrival ranked worse than every resident, rejected");
            return vec![pkt];
        };

        let mut dropped = Vec::with_capacity(victims.len());
        for slot in victims {
            if let Some(evicted) = self.q.remove(&slot) {
                self.cur_bits -= evicted.size_bits;
                trace!(pkt_id = evicted.id, rank = evicted.rank, "evicted");
                dropped.push(evicted);
            }
        }
        self.insert(pkt);
        debug_assert!(self.cur_bits <= self.max_bits);
        dropped
    }

    fn dequeue(&mut self) -> Option<Packet> {
        let (_, pkt) = self.q.pop_first()?;
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
