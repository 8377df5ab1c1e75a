//! Protocol constants
//!
//! These constants define the header tag, packet size, event type codes,
//! and bit-field layout used in the status datagram protocol.

// ============================================================================
// Packet Framing
// ============================================================================

/// Header tag carried by every status packet.
pub const STATUS_HDR: [u8; 2] = *b"MC";
/// Total packet size in bytes.
pub const STATUS_PACKET_LEN: usize = 20;
/// Packet length in 4-byte words, as carried in the length field.
pub const STATUS_PACKET_WORDS: u8 = 5;

// ============================================================================
// Event Type Codes
// ============================================================================

/// Reserved invalid code; never sent.
pub const STATUS_TYPE_INVALID: u8 = 0;
/// Unit registered on the system.
pub const STATUS_TYPE_REGISTRATION: u8 = 1;
/// Unit deregistered from the system.
pub const STATUS_TYPE_DEREGISTRATION: u8 = 2;
/// Unit acknowledge response.
pub const STATUS_TYPE_ACK_RESPONSE: u8 = 3;
/// Unit affiliated with a talkgroup.
pub const STATUS_TYPE_GROUP_AFFILIATION: u8 = 4;
/// Unit data grant.
pub const STATUS_TYPE_DATA_GRANT: u8 = 5;
/// Unit answer request.
pub const STATUS_TYPE_ANSWER_REQUEST: u8 = 6;
/// Unit location update.
pub const STATUS_TYPE_LOCATION_UPDATE: u8 = 7;
/// Call start (push-to-talk).
pub const STATUS_TYPE_CALL_START: u8 = 8;

// ============================================================================
// Field Packing
// ============================================================================

/// Mask for the 12-bit system site ID.
pub const SYSTEM_ID_MASK: u32 = 0x0FFF;
/// Shift placing the system site ID above the WACN in the P25 ID.
pub const SYSTEM_ID_SHIFT: u32 = 20;
/// Mask for the 20-bit WACN.
pub const WACN_MASK: u32 = 0xFFFFF;
/// Mask for the 12-bit network access code.
pub const NAC_MASK: u32 = 0x0FFF;
