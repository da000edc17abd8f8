use crate::errors::{AddressKind, DomainError};
use crate::hardware_addr::ZERO_HARDWARE_ADDR;
use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

// Column layout of /proc/net/arp:
// IP address       HW type     Flags       HW address            Mask     Device
// 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
pub const IP_COLUMN: usize = 0;
pub const HW_COLUMN: usize = 3;
pub const MIN_COLUMNS: usize = 4;

/// Bidirectional neighbor mapping built from one ARP cache snapshot.
///
/// IP address strings and hardware address strings share a single key space:
/// every `ip -> hw` entry has a matching `hw -> ip` entry. A table is never
/// mutated once built; refreshing means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArpTable {
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl ArpTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole snapshot held in memory.
    pub fn parse(snapshot: &str) -> Result<Self, DomainError> {
        Self::from_lines(snapshot.lines().map(Ok::<_, io::Error>))
    }

    /// Builds a table from snapshot lines, the first of which is a header.
    ///
    /// A read error on any line aborts the build and is returned as is; no
    /// partial table escapes.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let mut table = ArpTable::new();

        if let Some(header) = lines.next() {
            header?;
        }

        for line in lines {
            let line = line?;
            let fields: Vec<&str> = line.as_ref().split_whitespace().collect();
            if fields.len() < MIN_COLUMNS {
                continue;
            }
            table.insert_row(fields[IP_COLUMN], fields[HW_COLUMN])?;
        }

        Ok(table)
    }

    fn insert_row(&mut self, ip: &str, hw: &str) -> Result<(), DomainError> {
        if self.entries.contains_key(ip) {
            return Err(DomainError::DuplicateEntry {
                kind: AddressKind::IpAddress,
                value: ip.to_string(),
            });
        }

        // Incomplete entry, the kernel has not resolved this neighbor yet.
        if hw == ZERO_HARDWARE_ADDR {
            return Ok(());
        }

        if self.entries.contains_key(hw) {
            return Err(DomainError::DuplicateEntry {
                kind: AddressKind::HardwareAddress,
                value: hw.to_string(),
            });
        }

        self.entries.insert(ip.to_string(), hw.to_string());
        self.entries.insert(hw.to_string(), ip.to_string());
        self.order.push(ip.to_string());
        Ok(())
    }

    /// Raw lookup in the shared key space.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn hardware_addr_of(&self, ip: IpAddr) -> Option<&str> {
        self.get(&ip_key(ip))
    }

    pub fn ip_of(&self, hw: &str) -> Option<&str> {
        self.get(hw)
    }

    /// Number of neighbors, i.e. rows that made it into the table.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(ip, hw)` pairs in snapshot order.
    pub fn neighbors(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|ip| self.entries.get(ip).map(|hw| (ip.as_str(), hw.as_str())))
    }
}

/// Key under which an IP address is stored in an [`ArpTable`].
///
/// IPv4-mapped IPv6 addresses collapse to their dotted IPv4 form so they match
/// the rows the kernel writes.
pub fn ip_key(ip: IpAddr) -> String {
    match ip {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => v4.to_string(),
            None => v6.to_string(),
        },
        IpAddr::V4(v4) => v4.to_string(),
    }
}
