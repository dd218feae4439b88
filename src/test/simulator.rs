use std::any::Any;

use crate::net::{Link, NetWorld, NodeId, Packet, PacketDispatched, PortId};
use crate::queue::PifoQueue;
use crate::sim::{Event, SimTime, Simulator, World};
use crate::stats::SimLogger;

/// 记录每个事件执行的时刻与编号
#[derive(Default)]
struct Tape {
    seen: Vec<(SimTime, u32)>,
}

impl World for Tape {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn record(sim: &Simulator, world: &mut dyn World, id: u32) {
    if let Some(tape) = world.as_any_mut().downcast_mut::<Tape>() {
        tape.seen.push((sim.now(), id));
    }
}

struct Mark(u32);

impl Event for Mark {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        record(sim, world, self.0);
    }
}

/// 执行时记录自己，并在 `delay` 纳秒后调度 `Mark(next)`
struct Chain {
    id: u32,
    delay: u64,
    next: u32,
}

impl Event for Chain {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let Chain { id, delay, next } = *self;
        record(sim, world, id);
        let at = sim.now().after(delay);
        sim.schedule(at, Mark(next));
    }
}

#[test]
fn same_time_events_run_in_scheduling_order() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime(10), Mark(1));
    sim.schedule(SimTime(5), Mark(2));
    sim.schedule(SimTime(10), Mark(3));
    sim.schedule(SimTime(10), Mark(4));

    let mut tape = Tape::default();
    sim.run(&mut tape);

    assert_eq!(
        tape.seen,
        vec![
            (SimTime(5), 2),
            (SimTime(10), 1),
            (SimTime(10), 3),
            (SimTime(10), 4)
        ]
    );
    assert_eq!(sim.now(), SimTime(10));
}

#[test]
fn event_scheduled_for_now_runs_after_already_queued_ones() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime::ZERO, Chain { id: 1, delay: 0, next: 3 });
    sim.schedule(SimTime::ZERO, Mark(2));

    let mut tape = Tape::default();
    sim.run(&mut tape);

    let order: Vec<u32> = tape.seen.iter().map(|&(_, id)| id).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert_eq!(sim.now(), SimTime::ZERO);
}

#[test]
fn run_until_keeps_later_events_for_the_next_run() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime::ZERO, Mark(1));
    sim.schedule(SimTime(10), Mark(2));
    sim.schedule(SimTime(5), Mark(3));
    assert_eq!(sim.pending(), 3);
    assert_eq!(sim.peek_time(), Some(SimTime::ZERO));

    let mut tape = Tape::default();
    sim.run_until(SimTime(5), &mut tape);
    // 恰好在 until 的事件也执行
    assert_eq!(tape.seen, vec![(SimTime::ZERO, 1), (SimTime(5), 3)]);
    assert_eq!(sim.now(), SimTime(5));
    assert_eq!(sim.pending(), 1);
    assert_eq!(sim.peek_time(), Some(SimTime(10)));

    // 已调度的事件不会被取消
    sim.run(&mut tape);
    assert_eq!(tape.seen.last(), Some(&(SimTime(10), 2)));
    assert_eq!(sim.pending(), 0);
}

#[test]
fn run_until_without_events_still_advances_clock() {
    let mut sim = Simulator::default();
    let mut tape = Tape::default();
    sim.run_until(SimTime(7), &mut tape);
    assert_eq!(sim.now(), SimTime(7));
    assert!(tape.seen.is_empty());
}

#[test]
fn dispatch_event_in_foreign_world_is_dropped_quietly() {
    let mut sim = Simulator::default();
    let pkt = Packet::new(1, 0, 10, 0, NodeId(0), vec![NodeId(1)]);
    sim.schedule(SimTime(3), PacketDispatched { port: PortId(0), pkt });

    let mut tape = Tape::default();
    sim.run(&mut tape);
    assert!(tape.seen.is_empty());
    assert_eq!(sim.pending(), 0);
    assert_eq!(sim.now(), SimTime(3));
}

#[test]
fn same_time_completions_on_two_ports_follow_dispatch_order() {
    let mut sim = Simulator::default();
    let mut world = NetWorld::with_logger(SimLogger::new(true));
    let h0 = world.net.add_host("h0");
    let h1 = world.net.add_host("h1");
    let d0 = world.net.add_host("d0");
    for h in [h0, h1] {
        world
            .net
            .connect(
                h,
                d0,
                Link::new(SimTime::ZERO, 1.0).expect("link"),
                Box::new(PifoQueue::new(1_000)),
            )
            .expect("connect");
    }

    // 两个端口各发一个、各排队一个，发送完成都落在 t=100
    for src in [h0, h1, h0, h1] {
        let pkt = world.net.make_packet(0, 100, 0, src, vec![d0]);
        world.net.send_from(src, pkt, &mut sim);
    }
    sim.run(&mut world);

    assert_eq!(
        &world.net.logger.traces()[4..],
        &[
            "Time: 100 => Packet sent (from queue): PktId: 2, Priority: 0".to_string(),
            "Time: 100 => Packet sent (from queue): PktId: 3, Priority: 0".to_string(),
        ]
    );
    assert_eq!(world.net.stats.delivered_pkts, 4);
    assert_eq!(sim.now(), SimTime(200));
}
