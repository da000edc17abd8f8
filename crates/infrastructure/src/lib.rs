//! ARP Resolver Infrastructure Layer
pub mod system;

pub use system::{default_resolver, lookup_ip, lookup_mac, LinuxArpReader};
