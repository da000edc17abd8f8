pub mod arp_reader;
pub mod default_resolver;

pub use arp_reader::{LinuxArpReader, DEFAULT_ARP_PATH};
pub use default_resolver::{default_resolver, lookup_ip, lookup_mac, DEFAULT_TTL};
