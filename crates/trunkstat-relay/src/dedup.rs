//! Duplicate suppression for status packets.

use trunkstat_proto::StatusPacket;

/// Single-slot filter suppressing back-to-back identical packets.
///
/// The filter holds only the most recently attempted packet and compares
/// every candidate against it field by field. The slot is global across
/// event kinds and units: a packet from one radio suppresses an identical
/// packet from another if nothing was sent in between. One slot is all the
/// receiving side has ever been promised, so the granularity stays as is.
#[derive(Debug, Default)]
pub struct DedupFilter {
    last: Option<StatusPacket>,
}

impl DedupFilter {
    /// Create an empty filter; the first candidate always passes.
    pub fn new() -> Self {
        DedupFilter { last: None }
    }

    /// Whether the candidate differs from the last recorded packet.
    pub fn should_send(&self, candidate: &StatusPacket) -> bool {
        self.last.as_ref() != Some(candidate)
    }

    /// Record a packet as the most recent send attempt.
    ///
    /// Called after every attempt, whether or not the send succeeded, so a
    /// burst of identical events does not retry a failing packet forever.
    pub fn record(&mut self, candidate: StatusPacket) {
        self.last = Some(candidate);
    }

    /// The most recently recorded packet, if any.
    pub fn last(&self) -> Option<&StatusPacket> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trunkstat_proto::EventType;

    fn packet(radio_id: u32, timestamp: u32) -> StatusPacket {
        StatusPacket {
            event_type: EventType::Registration,
            radio_id,
            timestamp,
            ..StatusPacket::default()
        }
    }

    #[test]
    fn test_first_packet_passes() {
        let filter = DedupFilter::new();
        assert!(filter.should_send(&packet(1, 100)));
        assert!(filter.last().is_none());
    }

    #[test]
    fn test_suppresses_immediate_duplicate() {
        let mut filter = DedupFilter::new();
        let p = packet(1, 100);
        filter.record(p);
        assert!(!filter.should_send(&p));
    }

    #[test]
    fn test_any_field_change_passes() {
        let mut filter = DedupFilter::new();
        filter.record(packet(1, 100));
        assert!(filter.should_send(&packet(1, 101)));
        assert!(filter.should_send(&packet(2, 100)));
    }

    #[test]
    fn test_intervening_packet_clears_slot() {
        // P1, P1, P2, P1 -> send, suppress, send, send
        let mut filter = DedupFilter::new();
        let p1 = packet(1, 100);
        let p2 = packet(2, 100);

        assert!(filter.should_send(&p1));
        filter.record(p1);
        assert!(!filter.should_send(&p1));
        assert!(filter.should_send(&p2));
        filter.record(p2);
        assert!(filter.should_send(&p1));
    }
}
