//! 统计与日志
//!
//! 端口只通过 [`StatsSink`] 上报，具体记录方式由注入的 sink 决定；
//! [`SimLogger`] 是默认实现，一次仿真运行一个实例。

mod accounting;
mod logger;
mod sink;

pub use accounting::{
    account_drop, BENIGN_PACKETS_DROPPED, MALICIOUS_PACKETS_DROPPED, PACKETS_DELIVERED,
    PACKETS_DROPPED, PACKETS_DROPPED_AT_SOURCE, PACKETS_UNROUTABLE,
};
pub use logger::{PortReport, SimLogger, SimReport};
pub use sink::StatsSink;
