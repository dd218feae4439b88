//! 仿真世界

use std::any::Any;

/// 事件执行时可变访问的全部状态。
///
/// 事件只拿到 `&mut dyn World`，通过 `as_any_mut` 向下转型取回自己需要的具体世界
/// （网络仿真中是 `NetWorld`）。转型失败的事件应记录告警后放弃，而不是 panic。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
