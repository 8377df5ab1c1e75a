//! Error types for status packets.

use thiserror::Error;

/// Errors that can occur when decoding a status packet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// Datagram failed structural validation.
    #[error("malformed packet: {0}")]
    MalformedPacket(String),
}

impl PacketError {
    /// Create a malformed-packet error.
    pub fn malformed(message: impl Into<String>) -> Self {
        PacketError::MalformedPacket(message.into())
    }
}
