//! The status packet entity.

use serde::{Deserialize, Serialize};

use crate::types::{system_id, wacn, EventType};

/// A single unit status report, exactly 20 bytes on the wire.
///
/// The `"MC"` header tag and the length field are protocol constants
/// written by the codec; they are not stored here. The composite fields
/// `p25_id` and `nac` are always produced by the packing helpers
/// ([`pack_p25_id`](crate::pack_p25_id), [`pack_nac`](crate::pack_nac)),
/// never assembled by hand.
///
/// Equality compares every field; the duplicate filter relies on that to
/// recognize back-to-back identical reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPacket {
    /// Event kind reported by this packet.
    pub event_type: EventType,
    /// Packed system site ID (high 12 bits) and WACN (low 20 bits).
    pub p25_id: u32,
    /// Network access code (low 12 bits).
    pub nac: u16,
    /// Talkgroup ID; zero when the event does not involve one.
    pub talkgroup: u16,
    /// Source radio identifier.
    pub radio_id: u32,
    /// UNIX timestamp in seconds the event was observed.
    pub timestamp: u32,
}

impl StatusPacket {
    /// The system site ID carried in the packed P25 ID.
    pub fn system_id(&self) -> u16 {
        system_id(self.p25_id)
    }

    /// The WACN carried in the packed P25 ID.
    pub fn wacn(&self) -> u32 {
        wacn(self.p25_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pack_p25_id;

    #[test]
    fn test_packed_field_accessors() {
        let packet = StatusPacket {
            event_type: EventType::Registration,
            p25_id: pack_p25_id(0x00C, 0x1000),
            ..StatusPacket::default()
        };
        assert_eq!(packet.system_id(), 0x00C);
        assert_eq!(packet.wacn(), 0x1000);
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = StatusPacket {
            event_type: EventType::CallStart,
            p25_id: pack_p25_id(1, 2),
            nac: 3,
            talkgroup: 4,
            radio_id: 5,
            timestamp: 6,
        };
        assert_eq!(base, base);

        let mut changed = base;
        changed.timestamp += 1;
        assert_ne!(base, changed);

        let mut changed = base;
        changed.talkgroup = 0;
        assert_ne!(base, changed);

        let mut changed = base;
        changed.event_type = EventType::AnswerRequest;
        assert_ne!(base, changed);
    }
}
