//! 丢包分类计数

use tracing::debug;

use super::sink::StatsSink;
use crate::net::{NodeId, Packet};

pub const PACKETS_DROPPED: &str = "PACKETS_DROPPED";
pub const PACKETS_DROPPED_AT_SOURCE: &str = "PACKETS_DROPPED_AT_SOURCE";
pub const MALICIOUS_PACKETS_DROPPED: &str = "MALICIOUS_PACKETS_DROPPED";
pub const BENIGN_PACKETS_DROPPED: &str = "BENIGN_PACKETS_DROPPED";
/// 到达目的地的包
pub const PACKETS_DELIVERED: &str = "PACKETS_DELIVERED";
/// 找不到下一跳端口的包，计数后丢弃
pub const PACKETS_UNROUTABLE: &str = "PACKETS_UNROUTABLE";

/// 记录一个被丢弃的 packet。
///
/// `own_id` 是端口所属设备；源于该设备的包额外计入 "dropped at source"。
/// 只有带分类视图（TCP）的包才区分恶意（URG 置位）与正常。
pub fn account_drop(own_id: NodeId, pkt: &Packet, sink: &mut dyn StatsSink) {
    sink.increment_counter(PACKETS_DROPPED);
    if pkt.src == own_id {
        sink.increment_counter(PACKETS_DROPPED_AT_SOURCE);
    }
    let malicious = pkt.as_classified_transport().map(|h| h.urg);
    match malicious {
        Some(true) => sink.increment_counter(MALICIOUS_PACKETS_DROPPED),
        Some(false) => sink.increment_counter(BENIGN_PACKETS_DROPPED),
        None => {}
    }
    debug!(
        pkt_id = pkt.id,
        flow_id = pkt.flow_id,
        rank = pkt.rank,
        at_source = pkt.src == own_id,
        ?malicious,
        "🗑️  丢包"
    );
}
