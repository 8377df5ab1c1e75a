//! Trunked-Radio Status Datagram Protocol
//!
//! This crate provides types and utilities for the fixed-size status
//! datagram a trunked-radio monitor emits for every unit activity event
//! (registration, talkgroup affiliation, call start, and so on). Each
//! datagram is exactly 20 bytes: a constant `"MC"` header tag, an event
//! type code, a length field in 4-byte words, and the packed identity and
//! event fields.
//!
//! # Protocol Overview
//!
//! Packets travel as single UDP datagrams, one event per packet, with no
//! acknowledgement or retransmission. Multi-byte fields are little-endian.
//! The composite P25 identity fields are bit-packed:
//!
//! - **p25_id**: system site ID in the high 12 bits, WACN in the low 20
//! - **nac**: network access code in the low 12 bits of a 16-bit field
//!
//! # Example
//!
//! ```rust,ignore
//! use trunkstat_proto::{decode_packet, encode_packet, pack_p25_id, pack_nac,
//!                       EventType, StatusPacket};
//!
//! // Build and serialize a packet
//! let packet = StatusPacket {
//!     event_type: EventType::CallStart,
//!     p25_id: pack_p25_id(0x00C, 0x1000),
//!     nac: pack_nac(0x123),
//!     talkgroup: 101,
//!     radio_id: 4242,
//!     timestamp: 1_700_000_000,
//! };
//! let bytes = encode_packet(&packet);
//!
//! // Parse a received datagram
//! let received = decode_packet(&bytes)?;
//! ```

mod codec;
mod constants;
mod error;
mod packet;
mod types;

pub use codec::*;
pub use constants::*;
pub use error::*;
pub use packet::*;
pub use types::*;
