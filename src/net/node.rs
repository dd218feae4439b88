//! 设备类型
//!
//! 主机与交换机在本仿真中只区分名称和类型，转发逻辑由 `Network` 统一处理。

use super::id::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Host,
    Switch,
}

/// 网络设备
#[derive(Debug, Clone)]
pub struct Device {
    pub id: NodeId,
    pub name: String,
    pub kind: DeviceKind,
}
