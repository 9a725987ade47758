//! Mosaic (token) identifiers and quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved mosaic id, as assigned at definition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MosaicId(pub u64);

/// A mosaic reference that may still be a namespace alias. The node resolves
/// it at execution time; on the wire it is an opaque 8-byte id either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnresolvedMosaicId(pub u64);

impl From<MosaicId> for UnresolvedMosaicId {
    fn from(id: MosaicId) -> Self {
        Self(id.0)
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A quantity of one mosaic: the basic unit moved by a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mosaic {
    pub id: UnresolvedMosaicId,
    /// Amount in the mosaic's smallest indivisible unit.
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: UnresolvedMosaicId, amount: u64) -> Self {
        Self { id, amount }
    }
}

/// Creator-chosen nonce that seeds mosaic id generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicNonce(pub u32);

/// Mosaic capability flags, a bitfield on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicFlags(u8);

impl MosaicFlags {
    pub const NONE: MosaicFlags = MosaicFlags(0);
    pub const SUPPLY_MUTABLE: u8 = 0x01;
    pub const TRANSFERABLE: u8 = 0x02;
    pub const RESTRICTABLE: u8 = 0x04;

    pub fn new(supply_mutable: bool, transferable: bool, restrictable: bool) -> Self {
        let mut bits = 0;
        if supply_mutable {
            bits |= Self::SUPPLY_MUTABLE;
        }
        if transferable {
            bits |= Self::TRANSFERABLE;
        }
        if restrictable {
            bits |= Self::RESTRICTABLE;
        }
        Self(bits)
    }

    /// Reconstructs flags from the wire byte; unknown bits are dropped.
    pub fn from_raw(bits: u8) -> Self {
        Self(bits & (Self::SUPPLY_MUTABLE | Self::TRANSFERABLE | Self::RESTRICTABLE))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_supply_mutable(&self) -> bool {
        self.0 & Self::SUPPLY_MUTABLE != 0
    }

    pub fn is_transferable(&self) -> bool {
        self.0 & Self::TRANSFERABLE != 0
    }

    pub fn is_restrictable(&self) -> bool {
        self.0 & Self::RESTRICTABLE != 0
    }
}
