use super::arp_reader::LinuxArpReader;
use arp_resolver_application::ArpResolver;
use arp_resolver_domain::{DomainError, HardwareAddr};
use std::net::IpAddr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// Refresh interval of the process-wide resolver.
pub const DEFAULT_TTL: Duration = Duration::from_millis(100);

static DEFAULT_RESOLVER: LazyLock<ArpResolver> =
    LazyLock::new(|| ArpResolver::new(Arc::new(LinuxArpReader::new()), DEFAULT_TTL));

/// Process-wide resolver over `/proc/net/arp`, built on first use.
pub fn default_resolver() -> &'static ArpResolver {
    &DEFAULT_RESOLVER
}

/// Hardware address of `ip` according to the system ARP cache.
pub async fn lookup_mac(ip: IpAddr) -> Result<HardwareAddr, DomainError> {
    default_resolver().lookup_mac(ip).await
}

/// IP address of `hw` according to the system ARP cache.
pub async fn lookup_ip(hw: &HardwareAddr) -> Result<IpAddr, DomainError> {
    default_resolver().lookup_ip(hw).await
}
