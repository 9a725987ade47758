//! Transaction type codes and the small wire enums shared across bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant for every transaction kind the consensus engine understands.
///
/// The numeric values are the 16-bit type codes written to the wire; they
/// are fixed by the node and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum TransactionType {
    Transfer = 0x4154,
    MosaicDefinition = 0x414D,
    MosaicSupplyChange = 0x424D,
    MosaicAlias = 0x434E,
    NamespaceRegistration = 0x414E,
    AddressAlias = 0x424E,
    AccountLink = 0x414C,
    AccountAddressRestriction = 0x4150,
    AccountMosaicRestriction = 0x4250,
    AccountOperationRestriction = 0x4350,
    MosaicAddressRestriction = 0x4251,
    MosaicGlobalRestriction = 0x4151,
    AccountMetadata = 0x4144,
    MosaicMetadata = 0x4244,
    NamespaceMetadata = 0x4344,
    MultisigAccountModification = 0x4155,
    HashLock = 0x4148,
    SecretLock = 0x4152,
    SecretProof = 0x4252,
    AggregateComplete = 0x4141,
    AggregateBonded = 0x4241,
}

impl TransactionType {
    /// The 16-bit wire code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Maps a raw wire code back to a type. `None` means the payload was
    /// produced by a node speaking a newer wire dialect than this build.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0x4154 => Some(Self::Transfer),
            0x414D => Some(Self::MosaicDefinition),
            0x424D => Some(Self::MosaicSupplyChange),
            0x434E => Some(Self::MosaicAlias),
            0x414E => Some(Self::NamespaceRegistration),
            0x424E => Some(Self::AddressAlias),
            0x414C => Some(Self::AccountLink),
            0x4150 => Some(Self::AccountAddressRestriction),
            0x4250 => Some(Self::AccountMosaicRestriction),
            0x4350 => Some(Self::AccountOperationRestriction),
            0x4251 => Some(Self::MosaicAddressRestriction),
            0x4151 => Some(Self::MosaicGlobalRestriction),
            0x4144 => Some(Self::AccountMetadata),
            0x4244 => Some(Self::MosaicMetadata),
            0x4344 => Some(Self::NamespaceMetadata),
            0x4155 => Some(Self::MultisigAccountModification),
            0x4148 => Some(Self::HashLock),
            0x4152 => Some(Self::SecretLock),
            0x4252 => Some(Self::SecretProof),
            0x4141 => Some(Self::AggregateComplete),
            0x4241 => Some(Self::AggregateBonded),
            _ => None,
        }
    }

    /// `true` for the two aggregate variants.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::AggregateComplete | Self::AggregateBonded)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (0x{:04x})", self, self.code())
    }
}

// ---------------------------------------------------------------------------
// Shared wire enums
// ---------------------------------------------------------------------------

/// Link or unlink a remote (harvesting) account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum LinkAction {
    Unlink = 0,
    Link = 1,
}

impl LinkAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unlink),
            1 => Some(Self::Link),
            _ => None,
        }
    }
}

/// Direction of a mosaic supply change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MosaicSupplyChangeAction {
    Decrease = 0,
    Increase = 1,
}

impl MosaicSupplyChangeAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Decrease),
            1 => Some(Self::Increase),
            _ => None,
        }
    }
}

/// Hash function locking a secret lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockHashAlgorithm {
    Sha3_256 = 0,
    Keccak256 = 1,
    Hash160 = 2,
    Hash256 = 3,
}

impl LockHashAlgorithm {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Sha3_256),
            1 => Some(Self::Keccak256),
            2 => Some(Self::Hash160),
            3 => Some(Self::Hash256),
            _ => None,
        }
    }
}

/// What an account restriction filters on, and in which direction.
///
/// Bit 0x80 flips an allow-list into a block-list; the low bits select the
/// filtered dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccountRestrictionType {
    AllowAddress = 0x01,
    AllowMosaic = 0x02,
    AllowTransactionType = 0x04,
    BlockAddress = 0x81,
    BlockMosaic = 0x82,
    BlockTransactionType = 0x84,
}

impl AccountRestrictionType {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::AllowAddress),
            0x02 => Some(Self::AllowMosaic),
            0x04 => Some(Self::AllowTransactionType),
            0x81 => Some(Self::BlockAddress),
            0x82 => Some(Self::BlockMosaic),
            0x84 => Some(Self::BlockTransactionType),
            _ => None,
        }
    }
}

/// Add or remove a value from an account restriction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RestrictionModificationAction {
    Remove = 0,
    Add = 1,
}

impl RestrictionModificationAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Remove),
            1 => Some(Self::Add),
            _ => None,
        }
    }
}

/// Comparison operator of a mosaic global restriction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MosaicRestrictionType {
    None = 0,
    Eq = 1,
    Ne = 2,
    Lt = 3,
    Le = 4,
    Gt = 5,
    Ge = 6,
}

impl MosaicRestrictionType {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Eq),
            2 => Some(Self::Ne),
            3 => Some(Self::Lt),
            4 => Some(Self::Le),
            5 => Some(Self::Gt),
            6 => Some(Self::Ge),
            _ => None,
        }
    }
}
