//! Namespace identifiers and alias operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A namespace id, the 8-byte handle behind human-readable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespaceId(pub u64);

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Whether an alias transaction links or unlinks the alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AliasAction {
    Unlink = 0,
    Link = 1,
}

impl AliasAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unlink),
            1 => Some(Self::Link),
            _ => None,
        }
    }
}

/// What kind of namespace a registration creates.
///
/// Root namespaces rent a duration; child namespaces hang off a parent and
/// inherit its lifetime. The two carry different 8-byte fields on the wire,
/// so the enum keeps the invalid combinations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamespaceRegistration {
    /// A new top-level namespace rented for `duration` blocks.
    Root { duration: u64 },
    /// A sub-namespace of `parent_id`.
    Child { parent_id: NamespaceId },
}

impl NamespaceRegistration {
    /// The wire discriminant: 0 for root, 1 for child.
    pub fn type_byte(&self) -> u8 {
        match self {
            Self::Root { .. } => 0,
            Self::Child { .. } => 1,
        }
    }
}
