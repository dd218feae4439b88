//! 网络模拟模块
//!
//! 设备、链路、数据包、输出端口与网络拓扑。

mod deliver_packet;
mod error;
mod id;
mod link;
mod link_state;
mod net_world;
mod network;
mod node;
mod packet;
mod packet_dispatched;
mod port;
mod stats;
mod transport;

pub use deliver_packet::DeliverPacket;
pub use error::NetError;
pub use id::{NodeId, PortId};
pub use link::Link;
pub use link_state::LinkState;
pub use net_world::NetWorld;
pub use network::Network;
pub use node::{Device, DeviceKind};
pub use packet::Packet;
pub use packet_dispatched::{PacketDispatched, TxScheduler};
pub use port::OutputPort;
pub use stats::Stats;
pub use transport::{TcpHeader, Transport};
