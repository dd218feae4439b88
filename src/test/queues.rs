use crate::net::{NodeId, Packet};
use crate::queue::{DropTailQueue, PacketQueue, PifoQueue, QueueKind};

fn pkt(id: u64, size_bits: u64, rank: u64) -> Packet {
    Packet::new(id, 0, size_bits, rank, NodeId(0), vec![NodeId(1)])
}

fn ids(dropped: &[Packet]) -> Vec<u64> {
    dropped.iter().map(|p| p.id).collect()
}

fn drain_ids(q: &mut dyn PacketQueue) -> Vec<u64> {
    std::iter::from_fn(|| q.dequeue()).map(|p| p.id).collect()
}

/// Queue of capacity 30 bits holding ranks {3, 5, 7}, 10 bits each.
fn full_pifo() -> PifoQueue {
    let mut q = PifoQueue::new(30);
    assert!(q.offer(pkt(3, 10, 3)).is_empty());
    assert!(q.offer(pkt(7, 10, 7)).is_empty());
    assert!(q.offer(pkt(5, 10, 5)).is_empty());
    assert_eq!(q.occupied_bits(), 30);
    q
}

#[test]
fn droptail_queue_enforces_capacity_and_preserves_order() {
    let mut q = DropTailQueue::new(100);
    assert_eq!(q.capacity_bits(), 100);
    assert!(q.is_empty());

    assert!(q.offer(pkt(1, 60, 9)).is_empty());
    assert_eq!(q.occupied_bits(), 60);

    let dropped = q.offer(pkt(2, 50, 0));
    assert_eq!(ids(&dropped), vec![2]);
    assert_eq!(q.len(), 1);
    assert_eq!(q.occupied_bits(), 60);

    assert!(q.offer(pkt(3, 40, 0)).is_empty());
    assert_eq!(drain_ids(&mut q), vec![1, 3]);
    assert_eq!(q.occupied_bits(), 0);
}

#[test]
fn pifo_dequeues_by_rank_then_arrival() {
    let mut q = PifoQueue::new(1_000);
    for (id, rank) in [(1, 4), (2, 1), (3, 4), (4, 0), (5, 1)] {
        assert!(q.offer(pkt(id, 10, rank)).is_empty());
    }
    assert_eq!(q.ranks(), vec![0, 1, 1, 4, 4]);
    assert_eq!(drain_ids(&mut q), vec![4, 2, 5, 1, 3]);
    assert!(q.dequeue().is_none());
}

#[test]
fn pifo_better_arrival_evicts_worst_resident() {
    let mut q = full_pifo();
    let dropped = q.offer(pkt(4, 10, 4));
    assert_eq!(ids(&dropped), vec![7]);
    assert_eq!(q.ranks(), vec![3, 4, 5]);
    assert_eq!(q.occupied_bits(), 30);
}

#[test]
fn pifo_worst_arrival_is_rejected_and_queue_unchanged() {
    let mut q = full_pifo();
    let dropped = q.offer(pkt(9, 10, 9));
    assert_eq!(ids(&dropped), vec![9]);
    assert_eq!(q.ranks(), vec![3, 5, 7]);
    assert_eq!(q.occupied_bits(), 30);
}

#[test]
fn pifo_equal_rank_evicts_earliest_arrival_first() {
    let mut q = PifoQueue::new(30);
    assert!(q.offer(pkt(1, 10, 2)).is_empty());
    assert!(q.offer(pkt(10, 10, 7)).is_empty()); // A
    assert!(q.offer(pkt(11, 10, 7)).is_empty()); // B

    assert_eq!(ids(&q.offer(pkt(20, 10, 1))), vec![10]);
    assert_eq!(ids(&q.offer(pkt(21, 10, 1))), vec![11]);
    assert_eq!(q.ranks(), vec![1, 1, 2]);
}

#[test]
fn pifo_arrival_tied_with_worst_resident_evicts_the_resident() {
    let mut q = full_pifo();
    let dropped = q.offer(pkt(8, 10, 7));
    // 同为最差 rank 时先到的驻留包被挤出
    assert_eq!(ids(&dropped), vec![7]);
    assert_eq!(drain_ids(&mut q), vec![3, 5, 8]);
}

#[test]
fn pifo_large_arrival_evicts_several_residents_and_reports_all() {
    let mut q = full_pifo();
    let dropped = q.offer(pkt(2, 25, 2));
    // 需要腾出 25 bit：先 7 后 5，再 3
    assert_eq!(ids(&dropped), vec![7, 5, 3]);
    assert_eq!(q.ranks(), vec![2]);
    assert_eq!(q.occupied_bits(), 25);
}

#[test]
fn pifo_keeps_evicting_past_arrival_rank_until_it_fits() {
    let mut q = full_pifo();
    // rank 5、7 只能腾出 20 bit，继续挤出更优先的 rank 3
    let dropped = q.offer(pkt(4, 25, 4));
    assert_eq!(ids(&dropped), vec![7, 5, 3]);
    assert_eq!(q.ranks(), vec![4]);
    assert_eq!(q.occupied_bits(), 25);
}

#[test]
fn pifo_partial_eviction_stops_once_arrival_fits() {
    let mut q = PifoQueue::new(40);
    for (id, size, rank) in [(1, 10, 2), (2, 10, 6), (3, 15, 6), (4, 5, 9)] {
        assert!(q.offer(pkt(id, size, rank)).is_empty());
    }
    // 需要腾出 15 bit：rank 9 (5 bit)，再 rank 6 中先到的 (10 bit)
    let dropped = q.offer(pkt(5, 15, 6));
    assert_eq!(ids(&dropped), vec![4, 2]);
    assert_eq!(drain_ids(&mut q), vec![1, 3, 5]);
}

#[test]
fn pifo_rejects_packet_larger_than_capacity() {
    let mut q = PifoQueue::new(30);
    assert!(q.offer(pkt(1, 10, 5)).is_empty());
    let dropped = q.offer(pkt(2, 31, 0));
    assert_eq!(ids(&dropped), vec![2]);
    assert_eq!(q.len(), 1);
    assert_eq!(q.occupied_bits(), 10);
}

#[test]
fn pifo_zero_sized_packets_do_not_consume_capacity() {
    let mut q = PifoQueue::new(0);
    assert!(q.offer(pkt(1, 0, 3)).is_empty());
    assert!(q.offer(pkt(2, 0, 1)).is_empty());
    assert_eq!(q.occupied_bits(), 0);
    assert_eq!(drain_ids(&mut q), vec![2, 1]);
}

#[test]
fn pifo_occupancy_tracks_residents_under_mixed_load() {
    let mut q = PifoQueue::new(100);
    // 简单的线性同余序列，保证可复现
    let mut x: u64 = 12345;
    let mut next = || {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        x >> 33
    };
    for id in 0..500 {
        if next() % 4 == 0 {
            q.dequeue();
        } else {
            let size = 1 + next() % 60;
            let rank = next() % 8;
            q.offer(pkt(id, size, rank));
        }
        assert!(q.occupied_bits() <= q.capacity_bits());

        let occupied = q.occupied_bits();
        let residents: Vec<Packet> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(residents.iter().map(|p| p.size_bits).sum::<u64>(), occupied);
        for p in residents {
            assert!(q.offer(p).is_empty());
        }
    }
}

#[test]
fn queue_kind_builds_matching_discipline() {
    let mut pifo = QueueKind::Pifo.build(20);
    let mut fifo = QueueKind::DropTail.build(20);
    for q in [&mut pifo, &mut fifo] {
        assert_eq!(q.capacity_bits(), 20);
        assert!(q.offer(pkt(1, 10, 5)).is_empty());
        assert!(q.offer(pkt(2, 10, 5)).is_empty());
    }
    // 满时 rank 更好的包：PIFO 挤出旧包，DropTail 直接丢弃新包
    assert_eq!(ids(&pifo.offer(pkt(3, 10, 1))), vec![1]);
    assert_eq!(ids(&fifo.offer(pkt(3, 10, 1))), vec![3]);
}
