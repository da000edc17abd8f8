use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TTL_MS: u64 = 100;
pub const DEFAULT_SNAPSHOT_PATH: &str = "/proc/net/arp";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Minimum time between two reads of the neighbor table, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// File holding the kernel neighbor table snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl ResolverConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    DEFAULT_TTL_MS
}

fn default_snapshot_path() -> String {
    DEFAULT_SNAPSHOT_PATH.to_string()
}
