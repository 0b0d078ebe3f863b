use crate::ping_error::{PingError, PingResult};
use std::net::{IpAddr, Ipv4Addr};

/// Resolves `hostname` to its first IPv4 address.
pub fn lookup_host_v4(hostname: &str) -> PingResult<Ipv4Addr> {
    let ips = dns_lookup::lookup_host(hostname).map_err(|_| PingError::ResolutionFailed {
        hostname: hostname.to_owned(),
    })?;
    ips.into_iter()
        .find_map(|ip| match ip {
            IpAddr::V4(ipv4) => Some(ipv4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| PingError::ResolutionFailed { hostname: hostname.to_owned() })
}
