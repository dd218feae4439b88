//! 数据包类型
//!
//! 定义网络数据包及其相关操作。端口只读取 packet，不修改。

use super::id::NodeId;
use super::transport::{TcpHeader, Transport};

/// 网络数据包
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub id: u64,
    pub flow_id: u64,
    pub size_bits: u64,
    /// 优先级：越小越优先
    pub rank: u64,
    pub src: NodeId,
    /// src 之后依次经过的节点，最后一个为目的地
    pub path: Vec<NodeId>,
    /// 下一跳在 path 中的索引
    pub hop: usize,
    pub transport: Transport,
}

impl Packet {
    pub fn new(
        id: u64,
        flow_id: u64,
        size_bits: u64,
        rank: u64,
        src: NodeId,
        path: Vec<NodeId>,
    ) -> Self {
        Self {
            id,
            flow_id,
            size_bits,
            rank,
            src,
            path,
            hop: 0,
            transport: Transport::None,
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// 获取目标节点（无路径时即源节点本身）
    pub fn dst(&self) -> NodeId {
        self.path.last().copied().unwrap_or(self.src)
    }

    /// 获取下一跳节点（如果有）
    pub fn next(&self) -> Option<NodeId> {
        self.path.get(self.hop).copied()
    }

    /// 前进到下一跳
    pub fn advance(mut self) -> Self {
        self.hop += 1;
        self
    }

    /// 分类视图：仅 TCP packet 提供，用于区分恶意/正常流量
    pub fn as_classified_transport(&self) -> Option<&TcpHeader> {
        match &self.transport {
            Transport::Tcp(h) => Some(h),
            Transport::None => None,
        }
    }

    /// packet trace 中的描述片段
    pub(crate) fn trace_fields(&self) -> String {
        match self.as_classified_transport() {
            Some(h) => format!(
                "SeqNo: {}, ACKNo: {}, Priority: {}",
                h.seq, h.ack, self.rank
            ),
            None => format!("PktId: {}, Priority: {}", self.id, self.rank),
        }
    }
}
