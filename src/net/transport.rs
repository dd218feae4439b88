//! Transport-layer tags carried by packets.

/// Packet transport metadata.
///
/// Only the TCP header carries the classification marker used by drop
/// accounting; everything else is opaque to the egress port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transport {
    /// No transport metadata (default).
    #[default]
    None,
    /// TCP segment (simplified).
    Tcp(TcpHeader),
}

/// TCP header fields visible to the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TcpHeader {
    pub seq: u64,
    pub ack: u64,
    /// URG flag. Attack traffic in congestion scenarios is generated with it set.
    pub urg: bool,
}
