//! Error types for the status relay.

use std::io;

use thiserror::Error;

/// Errors that can occur while configuring or running the status relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Destination string is not a valid `udp://host[:port]` URI.
    #[error("invalid destination URI \"{uri}\": {reason}")]
    InvalidUri {
        /// The rejected URI.
        uri: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Destination host is the unspecified wildcard address.
    #[error("destination host \"{host}\" is the unspecified address")]
    UnspecifiedAddress {
        /// The rejected host.
        host: String,
    },

    /// Host/port resolution produced no usable address.
    #[error("failed to resolve {host}:{port}: {source}")]
    ResolutionFailed {
        /// Host that failed to resolve.
        host: String,
        /// Port the host was resolved with.
        port: u16,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// UDP socket could not be created or configured.
    #[error("failed to create UDP socket: {source}")]
    SocketCreateFailed {
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// The relay has no open transport; startup failed or never ran.
    #[error("transport not ready")]
    TransportNotReady,

    /// Datagram send reported an OS error.
    #[error("send failed: {source}")]
    SendFailed {
        /// Underlying send error.
        #[source]
        source: io::Error,
    },
}
