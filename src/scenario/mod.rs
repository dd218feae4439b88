//! 拥塞场景
//!
//! JSON 描述的场景：每条流一个源主机，经过共享交换机汇聚到一个接收主机，
//! 交换机到接收主机的端口是瓶颈。用于观察瓶颈队列在攻击流量下的丢包分布。

mod error;
mod inject;
mod runner;
mod spec;

pub use error::ScenarioError;
pub use inject::InjectFlow;
pub use runner::{build, run, RunOptions, ScenarioOutcome, ScenarioTopology};
pub use spec::{FlowKind, FlowSpec, PortSpec, ScenarioSpec, SCHEMA_VERSION};
