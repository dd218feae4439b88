//! 链路配置
//!
//! 带宽与传播时延在端口生命周期内固定。

use super::error::NetError;
use crate::sim::SimTime;

/// 网络链路
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub latency: SimTime,
    bandwidth_bits_per_ns: f64,
}

impl Link {
    /// 创建新链路；带宽必须为有限正数
    pub fn new(latency: SimTime, bandwidth_bits_per_ns: f64) -> Result<Self, NetError> {
        if !bandwidth_bits_per_ns.is_finite() || bandwidth_bits_per_ns <= 0.0 {
            return Err(NetError::InvalidBandwidth(bandwidth_bits_per_ns));
        }
        Ok(Self {
            latency,
            bandwidth_bits_per_ns,
        })
    }

    pub fn bandwidth_bits_per_ns(&self) -> f64 {
        self.bandwidth_bits_per_ns
    }

    /// 序列化 `size_bits` 所需时间：ceil(bits / bandwidth) 纳秒
    pub fn tx_time(&self, size_bits: u64) -> SimTime {
        let ns = (size_bits as f64 / self.bandwidth_bits_per_ns).ceil();
        // f64 -> u64 的 as 转换本身是饱和的
        SimTime(ns as u64)
    }
}
