//! UDP status relay for trunked-radio unit activity.
//!
//! This crate turns unit activity events (registration, talkgroup
//! affiliation, call start, and so on) into 20-byte status datagrams and
//! sends them to a configured monitor over UDP, best effort. The wire
//! format lives in `trunkstat-proto`; this crate owns everything around
//! it: destination URI resolution, the outbound socket, duplicate
//! suppression, configuration, and the `trunkstat` command-line tester.
//!
//! The pipeline is synchronous and call-driven. Each call to
//! [`StatusRelay::handle_event`] runs to completion: map the event to a
//! packet, drop it if it matches the last send, encode, and send one
//! datagram. There is no delivery guarantee, no retransmission, and no
//! session state beyond the single last-sent packet.
//!
//! # Example
//!
//! ```rust,ignore
//! use trunkstat_relay::{RelayConfig, StatusRelay, SystemId, UnitEvent};
//!
//! let mut relay = StatusRelay::new(RelayConfig::default());
//! relay.start()?;
//!
//! let system = SystemId { system_id: 0x00C, wacn: 0x1000, nac: 0x123 };
//! relay.handle_event(&system, &UnitEvent::CallStart { radio_id: 4242, talkgroup: 101 })?;
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod event;
pub mod metrics;
pub mod relay;
pub mod resolve;
pub mod transport;

pub use config::RelayConfig;
pub use dedup::DedupFilter;
pub use error::RelayError;
pub use event::{status_packet, SystemId, UnitEvent};
pub use relay::StatusRelay;
pub use resolve::{resolve_destination, Destination};
pub use transport::UdpTransport;
