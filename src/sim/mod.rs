//! 仿真核心模块
//!
//! 离散事件仿真器：仿真时间、事件、世界与事件队列。
//! 同一时刻的事件严格按调度顺序执行，保证仿真可复现。

mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

pub use event::Event;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
