use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ScenarioError;
use crate::queue::QueueKind;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    /// 交换机 -> 接收主机
    pub bottleneck: PortSpec,
    /// 源主机 -> 交换机；缺省时使用 [`PortSpec::access_default`]
    #[serde(default)]
    pub access: Option<PortSpec>,
    pub flows: Vec<FlowSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortSpec {
    pub bandwidth_gbps: f64,
    #[serde(default)]
    pub latency_ns: u64,
    pub queue_bits: u64,
    #[serde(default)]
    pub queue: QueueKind,
}

impl PortSpec {
    pub fn access_default() -> Self {
        Self {
            bandwidth_gbps: 100.0,
            latency_ns: 1_000,
            queue_bits: 8 * 1_000_000,
            queue: QueueKind::Pifo,
        }
    }
}

/// 流量类型：benign/attack 生成带 TCP 头的包（attack 置 URG），plain 不带传输层头
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Benign,
    Attack,
    Plain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowSpec {
    pub kind: FlowKind,
    pub pkts: u64,
    pub pkt_bits: u64,
    pub gap_ns: u64,
    pub rank: u64,
    #[serde(default)]
    pub start_ns: u64,
}

impl ScenarioSpec {
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        let spec: ScenarioSpec = serde_json::from_str(raw)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ScenarioError::UnsupportedSchema(self.schema_version));
        }
        if self.flows.is_empty() {
            return Err(ScenarioError::Invalid("no flows".into()));
        }
        if let Some(i) = self.flows.iter().position(|f| f.pkt_bits == 0) {
            return Err(ScenarioError::Invalid(format!("flow {i}: pkt_bits must be > 0")));
        }
        Ok(())
    }

    pub fn access_port(&self) -> PortSpec {
        self.access.clone().unwrap_or_else(PortSpec::access_default)
    }
}
