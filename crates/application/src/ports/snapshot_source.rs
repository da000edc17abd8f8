use arp_resolver_domain::{ArpTable, DomainError};
use async_trait::async_trait;

/// Provider of the current neighbor table.
///
/// Each call reads a fresh snapshot and parses it into a complete table.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_table(&self) -> Result<ArpTable, DomainError>;
}
