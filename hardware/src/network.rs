/*!
Network Reachability

One TCP connect to the configured test site. Every failure is an answer
(`reachable = false`), never an error.
*/

use serde::{Deserialize, Serialize};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::debug;

use crate::constants::{DEFAULT_NETWORK_HOST, DEFAULT_NETWORK_PORT, DEFAULT_NETWORK_TIMEOUT_MS};

/// Where the reachability probe connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTarget {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl NetworkTarget {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }
}

impl Default for NetworkTarget {
    fn default() -> Self {
        Self::new(
            DEFAULT_NETWORK_HOST,
            DEFAULT_NETWORK_PORT,
            Duration::from_millis(DEFAULT_NETWORK_TIMEOUT_MS),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResult {
    pub reachable: bool,
}

/// Attempt a TCP connection to `target`.
///
/// Each resolved address gets one attempt bounded by `target.timeout`; the
/// socket is closed again as soon as the connect succeeds.
pub fn probe_network(target: &NetworkTarget) -> NetworkResult {
    let addrs = match (target.host.as_str(), target.port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            debug!(host = %target.host, error = %e, "Network probe: name resolution failed");
            return NetworkResult { reachable: false };
        }
    };

    for addr in addrs {
        match TcpStream::connect_timeout(&addr, target.timeout) {
            Ok(stream) => {
                drop(stream);
                debug!(%addr, "Network probe: connected");
                return NetworkResult { reachable: true };
            }
            Err(e) => {
                debug!(%addr, error = %e, "Network probe: connect failed");
            }
        }
    }

    NetworkResult { reachable: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    fn local_target(port: u16) -> NetworkTarget {
        NetworkTarget::new("127.0.0.1", port, Duration::from_millis(500))
    }

    #[test]
    fn test_reachable_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(probe_network(&local_target(port)).reachable);
    }

    #[test]
    fn test_closed_port_is_unreachable() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        assert!(!probe_network(&local_target(port)).reachable);
    }

    #[test]
    fn test_invalid_host_is_unreachable() {
        let target = NetworkTarget::new("no such host.invalid", 80, Duration::from_millis(200));
        assert!(!probe_network(&target).reachable);
    }

    #[test]
    fn test_default_target() {
        let target = NetworkTarget::default();
        assert_eq!(target.host, "www.ibm.com");
        assert_eq!(target.port, 80);
    }
}
