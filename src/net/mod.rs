//! Connectivity probe.
//!
//! A collaborator used by the `status` command to tell the operator
//! whether online features are reachable.  It has no interaction with
//! the credential store, which works entirely offline.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Endpoints probed in order.  Public DNS resolvers answer on port 53
/// from essentially any network that has a route out.
const PROBE_ENDPOINTS: &[&str] = &["8.8.8.8:53", "1.1.1.1:53"];

/// How long to wait for each connection attempt.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Returns `true` if at least one probe endpoint accepts a TCP
/// connection within the timeout.
pub fn is_online() -> bool {
    PROBE_ENDPOINTS.iter().any(|endpoint| reachable(endpoint))
}

fn reachable(endpoint: &str) -> bool {
    let Ok(addrs) = endpoint.to_socket_addrs() else {
        return false;
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_endpoints_are_well_formed() {
        for endpoint in PROBE_ENDPOINTS {
            assert!(
                endpoint.to_socket_addrs().is_ok(),
                "endpoint {endpoint} must parse"
            );
        }
    }

    #[test]
    fn unreachable_endpoint_reports_false() {
        // TEST-NET-1 (RFC 5737) is guaranteed unroutable.
        assert!(!reachable("192.0.2.1:9"));
    }
}
