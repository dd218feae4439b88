//! 链路状态机：IDLE <-> BUSY

/// 链路是否正在发送。BUSY 当且仅当该端口有一个未触发的发送完成事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    #[default]
    Idle,
    Busy,
}

impl LinkState {
    pub fn is_sending(self) -> bool {
        self == LinkState::Busy
    }
}
