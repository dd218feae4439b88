use crate::net::PortId;
use crate::sim::SimTime;

/// 端口使用的日志/统计接口
pub trait StatsSink {
    /// 链路开始（`active = true`）或结束一段连续发送
    fn log_link_utilized(&mut self, port: PortId, now: SimTime, active: bool);
    /// 队列状态采样：队列长度与端口缓冲占用（bit）
    fn log_queue_state(&mut self, port: PortId, queue_len: usize, occupied_bits: u64);
    /// 是否记录逐包 trace
    fn packet_tracing_enabled(&self) -> bool {
        false
    }
    fn log_packet_trace(&mut self, _line: String) {}
    fn increment_counter(&mut self, name: &str);
}
