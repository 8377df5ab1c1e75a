//! The status relay pipeline.
//!
//! [`StatusRelay`] ties the resolver, transport, and duplicate filter
//! together. Startup resolves the configured destination and opens the
//! socket; after that, each unit event runs the same synchronous pipeline:
//! map the event to a packet, drop it if the transport never opened or the
//! packet matches the last attempt, otherwise encode and send one
//! datagram.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, error, info, warn};
use trunkstat_proto::encode_packet;

use crate::config::RelayConfig;
use crate::dedup::DedupFilter;
use crate::error::RelayError;
use crate::event::{status_packet, SystemId, UnitEvent};
use crate::metrics::{PACKETS_SENT, PACKETS_SUPPRESSED, SEND_FAILURES};
use crate::resolve::resolve_destination;
use crate::transport::UdpTransport;

/// Relays unit activity to a remote monitor as UDP status datagrams.
pub struct StatusRelay {
    config: RelayConfig,
    transport: Option<UdpTransport>,
    dedup: DedupFilter,
}

impl StatusRelay {
    /// Create a relay from configuration. No socket is opened until
    /// [`StatusRelay::start`] runs.
    pub fn new(config: RelayConfig) -> Self {
        StatusRelay {
            config,
            transport: None,
            dedup: DedupFilter::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Whether the transport is open and ready to send.
    pub fn is_ready(&self) -> bool {
        self.transport.is_some()
    }

    /// Resolve the configured destination and open the transport.
    ///
    /// Errors here are fatal to the transport but not to the relay: the
    /// caller decides whether to abort or run degraded, in which case every
    /// event reports [`RelayError::TransportNotReady`]. Startup is not
    /// retried automatically.
    pub fn start(&mut self) -> Result<(), RelayError> {
        info!("status destination: {}", self.config.destination);
        if !self.config.enabled {
            info!("unit status reporting disabled by configuration");
        }

        let dest = resolve_destination(&self.config.destination)?;
        self.transport = Some(UdpTransport::open(dest)?);
        Ok(())
    }

    /// Handle a unit event observed now.
    ///
    /// Thin wrapper over [`StatusRelay::handle_event_at`] stamping the
    /// current wall clock.
    pub fn handle_event(
        &mut self,
        system: &SystemId,
        event: &UnitEvent,
    ) -> Result<(), RelayError> {
        self.handle_event_at(system, event, unix_now())
    }

    /// Handle a unit event observed at an explicit UNIX timestamp.
    ///
    /// Send errors are non-fatal: the transport stays open and later
    /// events are processed normally.
    pub fn handle_event_at(
        &mut self,
        system: &SystemId,
        event: &UnitEvent,
        timestamp: u32,
    ) -> Result<(), RelayError> {
        if !self.config.enabled {
            return Ok(());
        }

        let packet = status_packet(system, event, timestamp);

        // Transport check comes before the duplicate check and leaves the
        // slot untouched: nothing was attempted.
        let Some(transport) = &self.transport else {
            error!(
                "unable to send unit status, transport not initialized ({} for radio {})",
                packet.event_type, packet.radio_id
            );
            return Err(RelayError::TransportNotReady);
        };

        if !self.dedup.should_send(&packet) {
            debug!(
                "suppressing duplicate {} for radio {}",
                packet.event_type, packet.radio_id
            );
            metrics::counter!(PACKETS_SUPPRESSED).increment(1);
            return Ok(());
        }

        let result = transport.send(&encode_packet(&packet));
        // The slot records the attempt even when the send failed, so a
        // burst of identical events does not retry the same packet.
        self.dedup.record(packet);

        match result {
            Ok(()) => {
                debug!(
                    "sent {} for radio {} to {}",
                    packet.event_type,
                    packet.radio_id,
                    transport.destination().addr
                );
                metrics::counter!(PACKETS_SENT).increment(1);
                Ok(())
            }
            Err(e) => {
                warn!("status send failed: {}", e);
                metrics::counter!(SEND_FAILURES).increment(1);
                Err(e)
            }
        }
    }
}

/// Current wall clock as UNIX seconds.
fn unix_now() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SystemId {
        SystemId {
            system_id: 0x00C,
            wacn: 0x1000,
            nac: 0x123,
        }
    }

    #[test]
    fn test_unstarted_relay_reports_not_ready() {
        let mut relay = StatusRelay::new(RelayConfig::default());
        assert!(!relay.is_ready());

        let err = relay
            .handle_event_at(&system(), &UnitEvent::Registration { radio_id: 1 }, 0)
            .expect_err("no transport yet");
        assert!(matches!(err, RelayError::TransportNotReady));
    }

    #[test]
    fn test_disabled_relay_reports_ok_without_transport() {
        let mut relay = StatusRelay::new(RelayConfig {
            enabled: false,
            ..RelayConfig::default()
        });

        // Disabled short-circuits before the transport check.
        relay
            .handle_event_at(&system(), &UnitEvent::Registration { radio_id: 1 }, 0)
            .expect("disabled relay drops events silently");
    }

    #[test]
    fn test_start_fails_on_bad_destination() {
        let mut relay = StatusRelay::new(RelayConfig {
            destination: "udp://0.0.0.0:7767".to_string(),
            enabled: true,
        });

        let err = relay.start().expect_err("unspecified destination");
        assert!(matches!(err, RelayError::UnspecifiedAddress { .. }));
        assert!(!relay.is_ready());
    }

    #[test]
    fn test_unix_now_is_current() {
        // Coarse sanity check: after 2023, before 2100.
        let now = unix_now();
        assert!(now > 1_700_000_000);
        assert!(now < 4_102_444_800);
    }
}
