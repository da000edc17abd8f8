use std::fmt;
use thiserror::Error;

/// Which side of a neighbor entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    IpAddress,
    HardwareAddress,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::IpAddress => "IP address",
            AddressKind::HardwareAddress => "hardware address",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate {kind} {value}")]
    DuplicateEntry { kind: AddressKind, value: String },

    #[error("{kind} {item} not found")]
    NotFound { kind: AddressKind, item: String },

    #[error("invalid address {value:?}: {reason}")]
    MalformedAddress { value: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DomainError {
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::MalformedAddress {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, DomainError::DuplicateEntry { .. })
    }

    /// The address kind carried by `DuplicateEntry` and `NotFound`.
    pub fn kind(&self) -> Option<AddressKind> {
        match self {
            DomainError::DuplicateEntry { kind, .. } | DomainError::NotFound { kind, .. } => {
                Some(*kind)
            }
            _ => None,
        }
    }
}
