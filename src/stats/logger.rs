//! 默认统计 sink
//!
//! 按名称累计计数器，按端口记录链路利用率与队列占用峰值，可选逐包 trace。

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::sink::StatsSink;
use crate::net::PortId;
use crate::sim::SimTime;

#[derive(Debug, Default, Clone)]
struct PortRecord {
    busy_since: Option<SimTime>,
    busy_ns: u64,
    busy_periods: u64,
    max_queue_len: usize,
    max_occupied_bits: u64,
    queue_len: usize,
    occupied_bits: u64,
}

/// 一次仿真运行的统计记录
#[derive(Debug, Default)]
pub struct SimLogger {
    trace_packets: bool,
    counters: BTreeMap<String, u64>,
    ports: BTreeMap<PortId, PortRecord>,
    traces: Vec<String>,
}

/// 单个端口的统计摘要
#[derive(Debug, Clone, Serialize)]
pub struct PortReport {
    pub port: PortId,
    pub busy_ns: u64,
    pub utilization: f64,
    pub busy_periods: u64,
    pub max_queue_len: usize,
    /// 采样峰值；包入队后、挤出前的那次采样可能高于队列容量
    pub max_occupied_bits: u64,
    pub queue_len: usize,
    pub occupied_bits: u64,
}

/// 仿真结束时输出的报告
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub end_ns: u64,
    pub counters: BTreeMap<String, u64>,
    pub ports: Vec<PortReport>,
}

impl SimLogger {
    pub fn new(trace_packets: bool) -> Self {
        Self {
            trace_packets,
            ..Self::default()
        }
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn counters(&self) -> &BTreeMap<String, u64> {
        &self.counters
    }

    pub fn traces(&self) -> &[String] {
        &self.traces
    }

    /// 端口当前是否处于一段发送中
    pub fn is_utilized(&self, port: PortId) -> bool {
        self.ports
            .get(&port)
            .is_some_and(|r| r.busy_since.is_some())
    }

    /// 清空所有记录，供下一次仿真复用
    pub fn reset(&mut self) {
        self.counters.clear();
        self.ports.clear();
        self.traces.clear();
    }

    /// 生成报告；仍在发送中的端口按 `now` 截断计入忙碌时间
    pub fn report(&self, now: SimTime) -> SimReport {
        let ports = self
            .ports
            .iter()
            .map(|(&port, r)| {
                let open = r.busy_since.map_or(0, |since| now.since(since));
                let busy_ns = r.busy_ns.saturating_add(open);
                let utilization = if now.0 == 0 {
                    0.0
                } else {
                    busy_ns as f64 / now.0 as f64
                };
                PortReport {
                    port,
                    busy_ns,
                    utilization,
                    busy_periods: r.busy_periods,
                    max_queue_len: r.max_queue_len,
                    max_occupied_bits: r.max_occupied_bits,
                    queue_len: r.queue_len,
                    occupied_bits: r.occupied_bits,
                }
            })
            .collect();
        SimReport {
            end_ns: now.0,
            counters: self.counters.clone(),
            ports,
        }
    }
}

impl StatsSink for SimLogger {
    fn log_link_utilized(&mut self, port: PortId, now: SimTime, active: bool) {
        let r = self.ports.entry(port).or_default();
        match (active, r.busy_since) {
            (true, None) => {
                r.busy_since = Some(now);
                r.busy_periods += 1;
            }
            (false, Some(since)) => {
                r.busy_ns = r.busy_ns.saturating_add(now.since(since));
                r.busy_since = None;
            }
            // 重复的开/关信号不改变统计
            _ => {}
        }
        debug!(port = port.0, now = ?now, active, "链路利用状态");
    }

    fn log_queue_state(&mut self, port: PortId, queue_len: usize, occupied_bits: u64) {
        let r = self.ports.entry(port).or_default();
        r.queue_len = queue_len;
        r.occupied_bits = occupied_bits;
        r.max_queue_len = r.max_queue_len.max(queue_len);
        r.max_occupied_bits = r.max_occupied_bits.max(occupied_bits);
        trace!(port = port.0, queue_len, occupied_bits, "队列状态");
    }

    fn packet_tracing_enabled(&self) -> bool {
        self.trace_packets
    }

    fn log_packet_trace(&mut self, line: String) {
        if self.trace_packets {
            trace!(line = line.as_str(), "packet trace");
            self.traces.push(line);
        }
    }

    fn increment_counter(&mut self, name: &str) {
        *self.counters.entry(name.to_string()).or_insert(0) += 1;
    }
}
