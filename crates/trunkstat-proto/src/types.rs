//! Event types and bit-field packing.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// The kind of unit activity a status packet reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Reserved invalid code; never sent.
    Invalid,
    /// Unit registered on the system.
    Registration,
    /// Unit deregistered from the system.
    Deregistration,
    /// Unit acknowledge response.
    AckResponse,
    /// Unit affiliated with a talkgroup.
    GroupAffiliation,
    /// Unit data grant.
    DataGrant,
    /// Unit answer request.
    AnswerRequest,
    /// Unit location update.
    LocationUpdate,
    /// Call start (push-to-talk).
    CallStart,
    /// Unrecognized type code, preserved so datagrams from newer senders
    /// round-trip without loss.
    Unknown(u8),
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Invalid
    }
}

impl From<u8> for EventType {
    fn from(value: u8) -> Self {
        match value {
            STATUS_TYPE_INVALID => EventType::Invalid,
            STATUS_TYPE_REGISTRATION => EventType::Registration,
            STATUS_TYPE_DEREGISTRATION => EventType::Deregistration,
            STATUS_TYPE_ACK_RESPONSE => EventType::AckResponse,
            STATUS_TYPE_GROUP_AFFILIATION => EventType::GroupAffiliation,
            STATUS_TYPE_DATA_GRANT => EventType::DataGrant,
            STATUS_TYPE_ANSWER_REQUEST => EventType::AnswerRequest,
            STATUS_TYPE_LOCATION_UPDATE => EventType::LocationUpdate,
            STATUS_TYPE_CALL_START => EventType::CallStart,
            _ => EventType::Unknown(value),
        }
    }
}

impl From<EventType> for u8 {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Invalid => STATUS_TYPE_INVALID,
            EventType::Registration => STATUS_TYPE_REGISTRATION,
            EventType::Deregistration => STATUS_TYPE_DEREGISTRATION,
            EventType::AckResponse => STATUS_TYPE_ACK_RESPONSE,
            EventType::GroupAffiliation => STATUS_TYPE_GROUP_AFFILIATION,
            EventType::DataGrant => STATUS_TYPE_DATA_GRANT,
            EventType::AnswerRequest => STATUS_TYPE_ANSWER_REQUEST,
            EventType::LocationUpdate => STATUS_TYPE_LOCATION_UPDATE,
            EventType::CallStart => STATUS_TYPE_CALL_START,
            EventType::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Invalid => write!(f, "invalid"),
            EventType::Registration => write!(f, "registration"),
            EventType::Deregistration => write!(f, "deregistration"),
            EventType::AckResponse => write!(f, "ack response"),
            EventType::GroupAffiliation => write!(f, "group affiliation"),
            EventType::DataGrant => write!(f, "data grant"),
            EventType::AnswerRequest => write!(f, "answer request"),
            EventType::LocationUpdate => write!(f, "location update"),
            EventType::CallStart => write!(f, "call start"),
            EventType::Unknown(code) => write!(f, "unknown (0x{:02X})", code),
        }
    }
}

/// Pack a system site ID and WACN into a P25 ID.
///
/// The high 12 bits carry the site ID and the low 20 the WACN. Bits beyond
/// those widths are silently truncated; callers supply in-range values.
pub fn pack_p25_id(system_id: u16, wacn: u32) -> u32 {
    ((system_id as u32 & SYSTEM_ID_MASK) << SYSTEM_ID_SHIFT) | (wacn & WACN_MASK)
}

/// Extract the system site ID from a P25 ID.
pub fn system_id(p25_id: u32) -> u16 {
    (p25_id >> SYSTEM_ID_SHIFT) as u16
}

/// Extract the WACN from a P25 ID.
pub fn wacn(p25_id: u32) -> u32 {
    p25_id & WACN_MASK
}

/// Pack a raw network access code into its 12-bit wire form.
pub fn pack_nac(nac: u32) -> u16 {
    (nac & NAC_MASK) as u16
}
