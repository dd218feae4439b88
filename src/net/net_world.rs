use super::network::Network;
use crate::sim::World;
use crate::stats::SimLogger;
use std::any::Any;

/// 网络事件（发送完成、交付、流量注入）共享的世界
#[derive(Default)]
pub struct NetWorld {
    pub net: Network,
}

impl NetWorld {
    /// 网络统计写入给定的 logger
    pub fn with_logger(logger: SimLogger) -> Self {
        Self {
            net: Network::with_logger(logger),
        }
    }
}

impl World for NetWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
