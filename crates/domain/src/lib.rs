//! ARP Resolver Domain Layer
pub mod arp_table;
pub mod config;
pub mod errors;
pub mod hardware_addr;

pub use arp_table::{ip_key, ArpTable};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{AddressKind, DomainError};
pub use hardware_addr::{HardwareAddr, ZERO_HARDWARE_ADDR};
