//! Status packet encoding and decoding.
//!
//! This module provides functions for encoding status packets to their
//! wire form and decoding received datagrams back to packets.
//!
//! ## Packet Format
//!
//! | Field     | Size (bytes) | Description                                      |
//! |-----------|--------------|--------------------------------------------------|
//! | hdr       | 2            | Constant tag `"MC"`.                             |
//! | typ       | 1            | Event type code.                                 |
//! | len       | 1            | Packet length in 4-byte words (always 5).        |
//! | p25_id    | 4            | System site ID (high 12 bits) + WACN (low 20).   |
//! | nac       | 2            | Network access code (low 12 bits).               |
//! | tg_id     | 2            | Talkgroup ID, zero when not applicable.          |
//! | radio_id  | 4            | Source radio identifier.                         |
//! | ts        | 4            | UNIX timestamp in seconds.                       |
//!
//! All multi-byte fields are little-endian. The layout is written and read
//! field by field; nothing relies on the in-memory representation of
//! [`StatusPacket`].

use crate::constants::*;
use crate::error::PacketError;
use crate::packet::StatusPacket;
use crate::types::EventType;

// ============================================================================
// Encoding
// ============================================================================

/// Encode a packet to its 20-byte wire form.
pub fn encode_packet(packet: &StatusPacket) -> [u8; STATUS_PACKET_LEN] {
    let mut buf = [0u8; STATUS_PACKET_LEN];

    // Header tag (2) + type (1) + length in words (1)
    buf[0..2].copy_from_slice(&STATUS_HDR);
    buf[2] = packet.event_type.into();
    buf[3] = STATUS_PACKET_WORDS;

    // Identity and event fields, little-endian
    buf[4..8].copy_from_slice(&packet.p25_id.to_le_bytes());
    buf[8..10].copy_from_slice(&packet.nac.to_le_bytes());
    buf[10..12].copy_from_slice(&packet.talkgroup.to_le_bytes());
    buf[12..16].copy_from_slice(&packet.radio_id.to_le_bytes());
    buf[16..20].copy_from_slice(&packet.timestamp.to_le_bytes());

    buf
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode and validate a received datagram.
///
/// The input must be exactly 20 bytes, begin with the `"MC"` tag, and carry
/// a length field of 5 words; anything else is malformed. An unrecognized
/// type code is not an error: it decodes to [`EventType::Unknown`].
pub fn decode_packet(data: &[u8]) -> Result<StatusPacket, PacketError> {
    if data.len() != STATUS_PACKET_LEN {
        return Err(PacketError::malformed(format!(
            "wrong length: expected {} bytes, got {}",
            STATUS_PACKET_LEN,
            data.len()
        )));
    }

    if &data[0..2] != &STATUS_HDR {
        return Err(PacketError::malformed(format!(
            "bad header tag: expected {}, got {}",
            hex::encode(STATUS_HDR),
            hex::encode(&data[0..2])
        )));
    }

    if data[3] != STATUS_PACKET_WORDS {
        return Err(PacketError::malformed(format!(
            "bad length field: expected {} words, got {}",
            STATUS_PACKET_WORDS, data[3]
        )));
    }

    Ok(StatusPacket {
        event_type: EventType::from(data[2]),
        p25_id: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
        nac: u16::from_le_bytes([data[8], data[9]]),
        talkgroup: u16::from_le_bytes([data[10], data[11]]),
        radio_id: u32::from_le_bytes([data[12], data[13], data[14], data[15]]),
        timestamp: u32::from_le_bytes([data[16], data[17], data[18], data[19]]),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{pack_nac, pack_p25_id};

    fn sample_packet() -> StatusPacket {
        StatusPacket {
            event_type: EventType::Registration,
            p25_id: pack_p25_id(0x00C, 0x1000),
            nac: pack_nac(0x123),
            talkgroup: 0,
            radio_id: 4242,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode_packet(&sample_packet());

        assert_eq!(bytes.len(), STATUS_PACKET_LEN);
        assert_eq!(&bytes[0..2], b"MC");
        assert_eq!(bytes[2], STATUS_TYPE_REGISTRATION);
        assert_eq!(bytes[3], STATUS_PACKET_WORDS);
        assert_eq!(
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            (12 << 20) | 0x1000
        );
        assert_eq!(u16::from_le_bytes([bytes[8], bytes[9]]), 0x123);
        assert_eq!(u16::from_le_bytes([bytes[10], bytes[11]]), 0);
        assert_eq!(
            u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
            4242
        );
        assert_eq!(
            u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
            1_700_000_000
        );
    }

    #[test]
    fn test_roundtrip() {
        let packet = StatusPacket {
            event_type: EventType::CallStart,
            p25_id: pack_p25_id(0xFFF, 0xFFFFF),
            nac: pack_nac(0xFFF),
            talkgroup: 0xFFFF,
            radio_id: 0xFFFF_FFFF,
            timestamp: 0xFFFF_FFFF,
        };

        let decoded = decode_packet(&encode_packet(&packet)).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_unknown_type_roundtrips() {
        let packet = StatusPacket {
            event_type: EventType::Unknown(0x2A),
            ..sample_packet()
        };

        let bytes = encode_packet(&packet);
        assert_eq!(bytes[2], 0x2A);

        let decoded = decode_packet(&bytes).unwrap();
        assert_eq!(decoded.event_type, EventType::Unknown(0x2A));
    }

    #[test]
    fn test_decode_rejects_short_input() {
        let bytes = encode_packet(&sample_packet());
        let err = decode_packet(&bytes[..19]).unwrap_err();
        assert!(err.to_string().contains("got 19"));
    }

    #[test]
    fn test_decode_rejects_long_input() {
        let mut data = encode_packet(&sample_packet()).to_vec();
        data.push(0);
        assert!(decode_packet(&data).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert!(decode_packet(&[]).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let mut bytes = encode_packet(&sample_packet());
        bytes[0] = b'X';
        let err = decode_packet(&bytes).unwrap_err();
        assert!(err.to_string().contains("header"));
    }

    #[test]
    fn test_decode_rejects_bad_length_field() {
        let mut bytes = encode_packet(&sample_packet());
        bytes[3] = 6;
        let err = decode_packet(&bytes).unwrap_err();
        assert!(err.to_string().contains("length field"));
    }
}
