use crate::net::{NodeId, Packet, PortId, TcpHeader, Transport};
use crate::sim::SimTime;
use crate::stats::{
    account_drop, StatsSink, BENIGN_PACKETS_DROPPED, MALICIOUS_PACKETS_DROPPED, PACKETS_DROPPED,
    PACKETS_DROPPED_AT_SOURCE,
};

/// 只记录计数器调用顺序的 sink
#[derive(Default)]
struct CounterLog {
    names: Vec<String>,
}

impl StatsSink for CounterLog {
    fn log_link_utilized(&mut self, _port: PortId, _now: SimTime, _active: bool) {}
    fn log_queue_state(&mut self, _port: PortId, _queue_len: usize, _occupied_bits: u64) {}
    fn increment_counter(&mut self, name: &str) {
        self.names.push(name.to_string());
    }
}

fn dropped(src: NodeId, transport: Transport) -> Packet {
    Packet::new(1, 0, 8, 0, src, vec![NodeId(5)]).with_transport(transport)
}

fn tcp(urg: bool) -> Transport {
    Transport::Tcp(TcpHeader { seq: 0, ack: 0, urg })
}

#[test]
fn transit_drop_counts_only_total() {
    let mut log = CounterLog::default();
    account_drop(NodeId(0), &dropped(NodeId(3), Transport::None), &mut log);
    assert_eq!(log.names, vec![PACKETS_DROPPED]);
}

#[test]
fn local_drop_also_counts_at_source() {
    let mut log = CounterLog::default();
    account_drop(NodeId(3), &dropped(NodeId(3), Transport::None), &mut log);
    assert_eq!(log.names, vec![PACKETS_DROPPED, PACKETS_DROPPED_AT_SOURCE]);
}

#[test]
fn urg_marks_malicious_and_its_absence_benign() {
    let mut log = CounterLog::default();
    account_drop(NodeId(0), &dropped(NodeId(3), tcp(true)), &mut log);
    assert_eq!(log.names, vec![PACKETS_DROPPED, MALICIOUS_PACKETS_DROPPED]);

    let mut log = CounterLog::default();
    account_drop(NodeId(3), &dropped(NodeId(3), tcp(false)), &mut log);
    assert_eq!(
        log.names,
        vec![PACKETS_DROPPED, PACKETS_DROPPED_AT_SOURCE, BENIGN_PACKETS_DROPPED]
    );
}
