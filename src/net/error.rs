//! 网络构建错误

use super::id::NodeId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NetError {
    #[error("link bandwidth must be finite and positive, got {0} bit/ns")]
    InvalidBandwidth(f64),
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    #[error("packet {pkt_id} has no next hop")]
    NoNextHop { pkt_id: u64 },
    #[error("no port from {from:?} to {to:?}")]
    NoPort { from: NodeId, to: NodeId },
}
