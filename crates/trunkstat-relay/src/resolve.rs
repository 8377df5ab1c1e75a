//! Destination URI parsing and resolution.
//!
//! Destinations are written as `udp://host[:port]`. The host may be a DNS
//! name, an IPv4 literal, or an IPv6 literal (bracketed when a port
//! follows); the port defaults to 7767 when absent or empty. The
//! unspecified wildcard addresses (`0.0.0.0`, `::`) are rejected, and the
//! IPv4 limited broadcast address marks the destination as requiring
//! SO_BROADCAST on the sending socket.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use tracing::debug;

use crate::error::RelayError;

/// URI scheme accepted for status destinations.
pub const UDP_SCHEME: &str = "udp://";

/// Destination port used when the URI does not carry one.
pub const DEFAULT_PORT: u16 = 7767;

/// A resolved status destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Socket address datagrams are sent to.
    pub addr: SocketAddr,
    /// Whether the address requires SO_BROADCAST on the sending socket.
    pub broadcast: bool,
}

/// Split a destination URI into host and port, without resolving.
fn split_uri(uri: &str) -> Result<(String, u16), RelayError> {
    let invalid = |reason: String| RelayError::InvalidUri {
        uri: uri.to_string(),
        reason,
    };

    let rest = uri
        .strip_prefix(UDP_SCHEME)
        .ok_or_else(|| invalid(format!("expected \"{}\" scheme", UDP_SCHEME)))?;

    // A bare IP literal is the whole host; splitting "::1" on its last
    // colon would eat part of the address.
    if rest.parse::<IpAddr>().is_ok() {
        return Ok((rest.to_string(), DEFAULT_PORT));
    }

    // Bracketed IPv6, with or without a port: "[::1]" or "[::1]:9999".
    if let Some(bracketed) = rest.strip_prefix('[') {
        let (host, after) = bracketed
            .split_once(']')
            .ok_or_else(|| invalid("unterminated '[' in host".to_string()))?;
        let port = match after {
            "" | ":" => DEFAULT_PORT,
            _ => {
                let port_str = after
                    .strip_prefix(':')
                    .ok_or_else(|| invalid(format!("unexpected text after host: \"{}\"", after)))?;
                port_str
                    .parse::<u16>()
                    .map_err(|_| invalid(format!("invalid port \"{}\"", port_str)))?
            }
        };
        if host.is_empty() {
            return Err(invalid("empty host".to_string()));
        }
        return Ok((host.to_string(), port));
    }

    // Hostname or IPv4 literal: split on the last colon, if any.
    let (host, port) = match rest.rfind(':') {
        None => (rest, DEFAULT_PORT),
        Some(idx) => {
            let port_str = &rest[idx + 1..];
            if port_str.is_empty() {
                (&rest[..idx], DEFAULT_PORT)
            } else {
                let port = port_str
                    .parse::<u16>()
                    .map_err(|_| invalid(format!("invalid port \"{}\"", port_str)))?;
                (&rest[..idx], port)
            }
        }
    };

    if host.is_empty() {
        return Err(invalid("empty host".to_string()));
    }

    Ok((host.to_string(), port))
}

/// Resolve a destination URI to a concrete socket address.
///
/// The host is resolved with the system resolver; the first candidate
/// wins, with no retry across the rest. Hosts that parse to the
/// unspecified wildcard address are rejected before resolution.
pub fn resolve_destination(uri: &str) -> Result<Destination, RelayError> {
    let (host, port) = split_uri(uri)?;
    debug!("parsed status destination: host \"{}\", port {}", host, port);

    if let Ok(ip) = host.parse::<IpAddr>() {
        if ip.is_unspecified() {
            return Err(RelayError::UnspecifiedAddress { host });
        }
    }

    let mut candidates =
        (host.as_str(), port)
            .to_socket_addrs()
            .map_err(|e| RelayError::ResolutionFailed {
                host: host.clone(),
                port,
                source: e,
            })?;
    let addr = candidates.next().ok_or_else(|| RelayError::ResolutionFailed {
        host: host.clone(),
        port,
        source: io::Error::new(io::ErrorKind::NotFound, "no addresses returned"),
    })?;

    let broadcast = match addr.ip() {
        IpAddr::V4(v4) => v4.is_broadcast(),
        IpAddr::V6(_) => false,
    };
    debug!("resolved status destination {} (broadcast: {})", addr, broadcast);

    Ok(Destination { addr, broadcast })
}
