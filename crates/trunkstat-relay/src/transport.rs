//! Outbound UDP transport for status datagrams.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use tracing::debug;

use crate::error::RelayError;
use crate::resolve::Destination;

/// One-shot outbound UDP transport bound to a resolved destination.
///
/// The socket stays unconnected; every datagram goes out through a single
/// `send_to`, best effort. There is no connection state, no retry, and no
/// queueing.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    dest: Destination,
}

impl UdpTransport {
    /// Open a transport for the given destination.
    ///
    /// Binds an ephemeral local socket of the destination's address family
    /// and enables SO_BROADCAST when the destination requires it.
    pub fn open(dest: Destination) -> Result<UdpTransport, RelayError> {
        let local_ip: IpAddr = if dest.addr.is_ipv4() {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        };
        let socket = UdpSocket::bind(SocketAddr::new(local_ip, 0))
            .map_err(|e| RelayError::SocketCreateFailed { source: e })?;

        if dest.broadcast {
            socket
                .set_broadcast(true)
                .map_err(|e| RelayError::SocketCreateFailed { source: e })?;
        }

        debug!("opened UDP transport to {} (broadcast: {})", dest.addr, dest.broadcast);
        Ok(UdpTransport { socket, dest })
    }

    /// The resolved destination this transport sends to.
    pub fn destination(&self) -> &Destination {
        &self.dest
    }

    /// Send one datagram, best effort.
    ///
    /// UDP sends are atomic at the OS level; the only failure is the send
    /// call itself reporting an error.
    pub fn send(&self, bytes: &[u8]) -> Result<(), RelayError> {
        self.socket
            .send_to(bytes, self.dest.addr)
            .map(|_| ())
            .map_err(|e| RelayError::SendFailed { source: e })
    }
}
