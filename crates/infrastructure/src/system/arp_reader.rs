use arp_resolver_application::ports::SnapshotSource;
use arp_resolver_domain::{ArpTable, DomainError};
use async_trait::async_trait;
use std::io;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub const DEFAULT_ARP_PATH: &str = "/proc/net/arp";

/// Linux ARP cache reader (reads /proc/net/arp)
pub struct LinuxArpReader {
    arp_path: String,
}

impl LinuxArpReader {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_ARP_PATH)
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            arp_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.arp_path
    }

    /// Reads the file line by line. A read error ends the snapshot and is
    /// handed to the parser in place of the failed line.
    async fn read_lines(&self) -> io::Result<Vec<io::Result<String>>> {
        let file = File::open(&self.arp_path).await?;
        let mut reader = BufReader::new(file).lines();
        let mut lines = Vec::new();

        loop {
            match reader.next_line().await {
                Ok(Some(line)) => lines.push(Ok(line)),
                Ok(None) => break,
                Err(e) => {
                    lines.push(Err(e));
                    break;
                }
            }
        }

        Ok(lines)
    }
}

impl Default for LinuxArpReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotSource for LinuxArpReader {
    async fn fetch_table(&self) -> Result<ArpTable, DomainError> {
        let lines = self.read_lines().await?;
        let table = ArpTable::from_lines(lines)?;

        debug!(path = %self.arp_path, entries = table.len(), "ARP table parsed");
        Ok(table)
    }
}
