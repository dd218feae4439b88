//! 标识符类型
//!
//! 定义设备和输出端口的唯一标识符。

use serde::Serialize;

/// 设备（主机/交换机）标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

/// 输出端口标识符：每个 (源设备, 目标设备, 链路) 三元组一个端口
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PortId(pub usize);
