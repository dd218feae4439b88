use super::simulator::Simulator;
use super::world::World;

/// 可调度的仿真事件。
///
/// 执行时按值消费自身，事件携带的 packet 随之交给端口或目标设备，不需要克隆。
/// 事件可以在执行中继续调度新事件（例如发送完成后调度下一个包的发送完成）。
pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World);
}
