//! Link-layer address type with parsing and canonical formatting.

use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Textual form of an unresolved neighbor entry in the kernel table.
pub const ZERO_HARDWARE_ADDR: &str = "00:00:00:00:00:00";

/// Octet counts accepted by [`HardwareAddr::from_str`]: EUI-48, EUI-64 and
/// 20-octet IP-over-InfiniBand link-layer addresses.
const VALID_LENGTHS: [usize; 3] = [6, 8, 20];

/// A link-layer (hardware) address.
///
/// Formats as lowercase, colon separated octets, which is also the form the
/// kernel uses in `/proc/net/arp`.
///
/// ```
/// use arp_resolver_domain::HardwareAddr;
///
/// let hw: HardwareAddr = "AA-BB-CC-DD-EE-FF".parse().unwrap();
/// assert_eq!(hw.to_string(), "aa:bb:cc:dd:ee:ff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    fn parse_separated(s: &str, sep: u8) -> Result<Vec<u8>, DomainError> {
        let bytes = s.as_bytes();
        if (bytes.len() + 1) % 3 != 0 {
            return Err(DomainError::malformed(s, "unexpected length"));
        }
        let count = (bytes.len() + 1) / 3;
        let mut octets = Vec::with_capacity(count);
        for i in 0..count {
            let start = i * 3;
            if i + 1 < count && bytes[start + 2] != sep {
                return Err(DomainError::malformed(s, "inconsistent separator"));
            }
            octets.push(parse_hex_octet(s, &s[start..start + 2])?);
        }
        Ok(octets)
    }

    fn parse_dotted(s: &str) -> Result<Vec<u8>, DomainError> {
        let bytes = s.as_bytes();
        if (bytes.len() + 1) % 5 != 0 {
            return Err(DomainError::malformed(s, "unexpected length"));
        }
        let groups = (bytes.len() + 1) / 5;
        let mut octets = Vec::with_capacity(groups * 2);
        for i in 0..groups {
            let start = i * 5;
            if i + 1 < groups && bytes[start + 4] != b'.' {
                return Err(DomainError::malformed(s, "inconsistent separator"));
            }
            octets.push(parse_hex_octet(s, &s[start..start + 2])?);
            octets.push(parse_hex_octet(s, &s[start + 2..start + 4])?);
        }
        Ok(octets)
    }
}

fn parse_hex_octet(whole: &str, pair: &str) -> Result<u8, DomainError> {
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::malformed(whole, "invalid hex digit"));
    }
    u8::from_str_radix(pair, 16).map_err(|e| DomainError::malformed(whole, e.to_string()))
}

impl FromStr for HardwareAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 14 {
            return Err(DomainError::malformed(s, "unexpected length"));
        }

        let octets = match s.as_bytes()[2] {
            b':' => Self::parse_separated(s, b':')?,
            b'-' => Self::parse_separated(s, b'-')?,
            _ if s.as_bytes()[4] == b'.' => Self::parse_dotted(s)?,
            _ => return Err(DomainError::malformed(s, "unknown separator")),
        };

        if !VALID_LENGTHS.contains(&octets.len()) {
            return Err(DomainError::malformed(
                s,
                format!("{} octets is not a hardware address length", octets.len()),
            ));
        }

        Ok(HardwareAddr(octets))
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}

impl From<[u8; 6]> for HardwareAddr {
    fn from(bytes: [u8; 6]) -> Self {
        HardwareAddr(bytes.to_vec())
    }
}

impl TryFrom<&[u8]> for HardwareAddr {
    type Error = DomainError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !VALID_LENGTHS.contains(&bytes.len()) {
            return Err(DomainError::malformed(
                format!("{:02x?}", bytes),
                format!("{} octets is not a hardware address length", bytes.len()),
            ));
        }
        Ok(HardwareAddr(bytes.to_vec()))
    }
}
