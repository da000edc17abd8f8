use crate::ports::SnapshotSource;
use arp_resolver_domain::{AddressKind, ArpTable, DomainError, HardwareAddr};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Stand-in deadline for TTLs too large to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Default)]
struct CacheState {
    table: Option<Arc<ArpTable>>,
    /// Next mandatory refresh. `None` until the first successful read.
    deadline: Option<Instant>,
}

impl CacheState {
    fn is_stale(&self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }
}

/// Answers IP <-> hardware address queries from the system neighbor table.
///
/// The table is re-read lazily: a lookup arriving at or after the deadline
/// rebuilds it inline before answering, and the next deadline is set `ttl`
/// after that rebuild. Refreshes are serialized per resolver; a failed
/// refresh leaves the previous table and deadline untouched.
pub struct ArpResolver {
    source: Arc<dyn SnapshotSource>,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl ArpResolver {
    pub fn new(source: Arc<dyn SnapshotSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the hardware address recorded for `ip`.
    #[instrument(skip(self))]
    pub async fn lookup_mac(&self, ip: IpAddr) -> Result<HardwareAddr, DomainError> {
        let table = self.table().await?;

        let hw = table
            .hardware_addr_of(ip)
            .ok_or_else(|| DomainError::NotFound {
                kind: AddressKind::IpAddress,
                item: ip.to_string(),
            })?;

        hw.parse()
    }

    /// Returns the IP address recorded for `hw`.
    #[instrument(skip(self, hw), fields(hw = %hw))]
    pub async fn lookup_ip(&self, hw: &HardwareAddr) -> Result<IpAddr, DomainError> {
        let table = self.table().await?;
        let key = hw.to_string();

        let ip = table.ip_of(&key).ok_or_else(|| DomainError::NotFound {
            kind: AddressKind::HardwareAddress,
            item: key.clone(),
        })?;

        ip.parse()
            .map_err(|_| DomainError::malformed(ip, "invalid IP address"))
    }

    /// Last published table, without checking the deadline.
    pub async fn cached_table(&self) -> Option<Arc<ArpTable>> {
        self.state.lock().await.table.clone()
    }

    /// Current table, rebuilt first if the deadline has passed.
    ///
    /// The lock covers only the staleness check and the rebuild; callers read
    /// the returned table without holding it.
    pub async fn table(&self) -> Result<Arc<ArpTable>, DomainError> {
        let mut state = self.state.lock().await;

        if let (false, Some(table)) = (state.is_stale(Instant::now()), state.table.as_ref()) {
            debug!(entries = table.len(), "Serving cached neighbor table");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.source.fetch_table().await?);
        let now = Instant::now();
        let deadline = now
            .checked_add(self.ttl)
            .unwrap_or_else(|| now + FAR_FUTURE);

        state.table = Some(Arc::clone(&table));
        state.deadline = Some(deadline);

        debug!(
            entries = table.len(),
            ttl_ms = u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX),
            "Neighbor table refreshed"
        );
        Ok(table)
    }
}
