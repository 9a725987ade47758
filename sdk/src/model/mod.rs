//! Domain model for the HELIX transaction layer.
//!
//! Everything here is a plain value object: constructed once, never mutated,
//! cheap to clone. The wire representation of these types lives in
//! [`crate::codec`]; model types know nothing about byte layouts.

pub mod account;
pub mod message;
pub mod mosaic;
pub mod multisig;
pub mod namespace;

pub use account::{
    Address, Hash256, ModelError, NetworkType, PublicAccount, PublicKey, Signature,
    UnresolvedAddress,
};
pub use message::{Message, MessageType};
pub use mosaic::{Mosaic, MosaicFlags, MosaicId, MosaicNonce, UnresolvedMosaicId};
pub use multisig::{MultisigAccountGraphInfo, MultisigAccountInfo};
pub use namespace::{AliasAction, NamespaceId, NamespaceRegistration};
