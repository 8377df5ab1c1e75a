//! Metric definitions for the status relay.
//!
//! Counters are recorded through the `metrics` facade; they are no-ops
//! until the host installs a recorder. [`describe_metrics`] should be
//! called once at startup so exporters can attach descriptions.

use ::metrics::{describe_counter, Unit};

/// Status datagrams handed to the OS for delivery.
pub const PACKETS_SENT: &str = "trunkstat.packets_sent";
/// Duplicate packets suppressed before sending.
pub const PACKETS_SUPPRESSED: &str = "trunkstat.packets_suppressed";
/// Send attempts that reported an OS error.
pub const SEND_FAILURES: &str = "trunkstat.send_failures";

/// Registers all metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(
        PACKETS_SENT,
        Unit::Count,
        "Status datagrams handed to the OS for delivery"
    );
    describe_counter!(
        PACKETS_SUPPRESSED,
        Unit::Count,
        "Duplicate status packets suppressed before sending"
    );
    describe_counter!(
        SEND_FAILURES,
        Unit::Count,
        "Status datagram send attempts that reported an error"
    );
}
