//! 统计信息
//!
//! 送达侧统计；丢包计数在 [`crate::stats::SimLogger`] 中。

use serde::Serialize;

/// 网络统计信息
#[derive(Debug, Default, Clone, Serialize)]
pub struct Stats {
    pub delivered_pkts: u64,
    pub delivered_bits: u64,
    pub delivered_benign_pkts: u64,
    pub delivered_malicious_pkts: u64,
}
