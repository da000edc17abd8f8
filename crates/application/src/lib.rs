//! ARP Resolver Application Layer
pub mod ports;
pub mod services;

pub use ports::SnapshotSource;
pub use services::ArpResolver;
