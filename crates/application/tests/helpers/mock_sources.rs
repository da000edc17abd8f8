#![allow(dead_code)]

use arp_resolver_application::ports::SnapshotSource;
use arp_resolver_domain::{ArpTable, DomainError};
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const HEADER: &str =
    "IP address       HW type     Flags       HW address            Mask     Device";

pub fn snapshot(rows: &[(&str, &str)]) -> String {
    let mut content = String::from(HEADER);
    for (ip, hw) in rows {
        content.push_str(&format!("\n{ip:<16} 0x1         0x2         {hw}     *        eth0"));
    }
    content
}

pub struct MockSnapshotSource {
    snapshot: Arc<RwLock<String>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    delay: Option<Duration>,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self::with_entries(vec![])
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        Self::with_raw(&snapshot(&entries))
    }

    pub fn with_raw(content: &str) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(content.to_string())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            delay: None,
        }
    }

    /// Every read sleeps for `delay` before returning.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn set_entries(&self, entries: Vec<(&str, &str)>) {
        *self.snapshot.write().await = snapshot(&entries);
    }
}

#[async_trait]
impl SnapshotSource for MockSnapshotSource {
    async fn fetch_table(&self) -> Result<ArpTable, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().await {
            return Err(DomainError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "ARP read failed",
            )));
        }
        ArpTable::parse(&self.snapshot.read().await)
    }
}
