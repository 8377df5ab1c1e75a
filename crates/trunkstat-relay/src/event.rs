//! Unit activity events and their packet mapping.

use serde::{Deserialize, Serialize};
use trunkstat_proto::{pack_nac, pack_p25_id, EventType, StatusPacket};

/// Identity of the radio system an event was observed on.
///
/// Carried per event because a host may monitor several systems at once.
/// Fields are raw values as the host knows them; the packing helpers
/// truncate them to their wire widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemId {
    /// System site identifier (low 12 bits used).
    pub system_id: u16,
    /// Wide area communications network number (low 20 bits used).
    pub wacn: u32,
    /// Network access code (low 12 bits used).
    pub nac: u32,
}

/// Unit activity observed on a trunked radio system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitEvent {
    /// Unit registered on the system.
    Registration {
        /// Registering radio.
        radio_id: u32,
    },

    /// Unit deregistered from the system.
    Deregistration {
        /// Deregistering radio.
        radio_id: u32,
    },

    /// Unit acknowledge response.
    AckResponse {
        /// Acknowledging radio.
        radio_id: u32,
    },

    /// Unit affiliated with a talkgroup.
    GroupAffiliation {
        /// Affiliating radio.
        radio_id: u32,
        /// Talkgroup joined.
        talkgroup: u16,
    },

    /// Unit data grant.
    DataGrant {
        /// Radio granted the data channel.
        radio_id: u32,
    },

    /// Unit answer request.
    AnswerRequest {
        /// Requesting radio.
        radio_id: u32,
        /// Talkgroup the request refers to.
        talkgroup: u16,
    },

    /// Unit location update.
    LocationUpdate {
        /// Roaming radio.
        radio_id: u32,
        /// Talkgroup the radio is affiliated with.
        talkgroup: u16,
    },

    /// Call started (push-to-talk).
    CallStart {
        /// Radio keying up.
        radio_id: u32,
        /// Talkgroup being called.
        talkgroup: u16,
    },
}

impl UnitEvent {
    /// The wire event type for this event.
    pub fn event_type(&self) -> EventType {
        match self {
            UnitEvent::Registration { .. } => EventType::Registration,
            UnitEvent::Deregistration { .. } => EventType::Deregistration,
            UnitEvent::AckResponse { .. } => EventType::AckResponse,
            UnitEvent::GroupAffiliation { .. } => EventType::GroupAffiliation,
            UnitEvent::DataGrant { .. } => EventType::DataGrant,
            UnitEvent::AnswerRequest { .. } => EventType::AnswerRequest,
            UnitEvent::LocationUpdate { .. } => EventType::LocationUpdate,
            UnitEvent::CallStart { .. } => EventType::CallStart,
        }
    }

    /// The radio that produced this event.
    pub fn radio_id(&self) -> u32 {
        match *self {
            UnitEvent::Registration { radio_id }
            | UnitEvent::Deregistration { radio_id }
            | UnitEvent::AckResponse { radio_id }
            | UnitEvent::GroupAffiliation { radio_id, .. }
            | UnitEvent::DataGrant { radio_id }
            | UnitEvent::AnswerRequest { radio_id, .. }
            | UnitEvent::LocationUpdate { radio_id, .. }
            | UnitEvent::CallStart { radio_id, .. } => radio_id,
        }
    }

    /// The talkgroup this event refers to, if it carries one.
    pub fn talkgroup(&self) -> Option<u16> {
        match *self {
            UnitEvent::GroupAffiliation { talkgroup, .. }
            | UnitEvent::AnswerRequest { talkgroup, .. }
            | UnitEvent::LocationUpdate { talkgroup, .. }
            | UnitEvent::CallStart { talkgroup, .. } => Some(talkgroup),
            _ => None,
        }
    }
}

/// Build the status packet for an event observed at `timestamp`.
///
/// Pure mapping with no clock access: the caller supplies the timestamp as
/// UNIX seconds. Events without a talkgroup leave the field zero.
pub fn status_packet(system: &SystemId, event: &UnitEvent, timestamp: u32) -> StatusPacket {
    StatusPacket {
        event_type: event.event_type(),
        p25_id: pack_p25_id(system.system_id, system.wacn),
        nac: pack_nac(system.nac),
        talkgroup: event.talkgroup().unwrap_or(0),
        radio_id: event.radio_id(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM: SystemId = SystemId {
        system_id: 0x00C,
        wacn: 0x1000,
        nac: 0x123,
    };

    #[test]
    fn test_registration_packet() {
        let packet = status_packet(
            &SYSTEM,
            &UnitEvent::Registration { radio_id: 4242 },
            1_700_000_000,
        );

        assert_eq!(packet.event_type, EventType::Registration);
        assert_eq!(packet.p25_id, (12 << 20) | 0x1000);
        assert_eq!(packet.nac, 0x123);
        assert_eq!(packet.talkgroup, 0);
        assert_eq!(packet.radio_id, 4242);
        assert_eq!(packet.timestamp, 1_700_000_000);
    }

    #[test]
    fn test_call_start_carries_talkgroup() {
        let packet = status_packet(
            &SYSTEM,
            &UnitEvent::CallStart {
                radio_id: 4242,
                talkgroup: 101,
            },
            1_700_000_000,
        );

        assert_eq!(packet.event_type, EventType::CallStart);
        assert_eq!(packet.talkgroup, 101);
        assert_eq!(packet.radio_id, 4242);
    }

    #[test]
    fn test_talkgroup_zero_when_not_carried() {
        for event in [
            UnitEvent::Registration { radio_id: 7 },
            UnitEvent::Deregistration { radio_id: 7 },
            UnitEvent::AckResponse { radio_id: 7 },
            UnitEvent::DataGrant { radio_id: 7 },
        ] {
            let packet = status_packet(&SYSTEM, &event, 0);
            assert_eq!(packet.talkgroup, 0, "{:?}", event);
            assert_eq!(packet.radio_id, 7);
        }
    }

    #[test]
    fn test_every_kind_maps_to_its_code() {
        let cases = [
            (UnitEvent::Registration { radio_id: 1 }, 1u8),
            (UnitEvent::Deregistration { radio_id: 1 }, 2),
            (UnitEvent::AckResponse { radio_id: 1 }, 3),
            (
                UnitEvent::GroupAffiliation {
                    radio_id: 1,
                    talkgroup: 9,
                },
                4,
            ),
            (UnitEvent::DataGrant { radio_id: 1 }, 5),
            (
                UnitEvent::AnswerRequest {
                    radio_id: 1,
                    talkgroup: 9,
                },
                6,
            ),
            (
                UnitEvent::LocationUpdate {
                    radio_id: 1,
                    talkgroup: 9,
                },
                7,
            ),
            (
                UnitEvent::CallStart {
                    radio_id: 1,
                    talkgroup: 9,
                },
                8,
            ),
        ];
        for (event, code) in cases {
            assert_eq!(u8::from(event.event_type()), code, "{:?}", event);
        }
    }

    #[test]
    fn test_system_fields_truncate_to_wire_widths() {
        let system = SystemId {
            system_id: 0xFFFF,
            wacn: 0xFFFF_FFFF,
            nac: 0xFFFF_FFFF,
        };
        let packet = status_packet(&system, &UnitEvent::DataGrant { radio_id: 1 }, 0);
        assert_eq!(packet.system_id(), 0x0FFF);
        assert_eq!(packet.wacn(), 0xFFFFF);
        assert_eq!(packet.nac, 0x0FFF);
    }
}
