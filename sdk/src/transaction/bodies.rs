//! Type-specific transaction bodies.
//!
//! Each transaction kind carries exactly one of these payloads after the
//! common header. [`TransactionBody`] is the closed sum over all kinds: the
//! codec dispatches on it exhaustively, so adding a kind is a compile error
//! in every place that must learn about it; there is no runtime registry
//! to forget to update.

use serde::{Deserialize, Serialize};

use crate::model::{
    Address, AliasAction, Hash256, Message, Mosaic, MosaicFlags, MosaicId, MosaicNonce,
    NamespaceId, NamespaceRegistration, PublicKey, UnresolvedAddress, UnresolvedMosaicId,
};

use super::builder::{Cosignature, EmbeddedTransaction};
use super::types::{
    AccountRestrictionType, LinkAction, LockHashAlgorithm, MosaicRestrictionType,
    MosaicSupplyChangeAction, RestrictionModificationAction, TransactionType,
};

// ---------------------------------------------------------------------------
// Body structs
// ---------------------------------------------------------------------------

/// Value transfer: mosaics plus an optional message to a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBody {
    pub recipient: UnresolvedAddress,
    /// Encoded sorted ascending by raw mosaic id regardless of the order
    /// given here; the node rejects unsorted mosaic lists.
    pub mosaics: Vec<Mosaic>,
    /// `None` encodes a zero message size; an empty plain message still
    /// costs one type byte on the wire, so the two are distinct.
    pub message: Option<Message>,
}

/// Creates a new mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicDefinitionBody {
    pub nonce: MosaicNonce,
    pub id: MosaicId,
    pub flags: MosaicFlags,
    pub divisibility: u8,
    /// Rental duration in blocks; 0 means eternal.
    pub duration: u64,
}

/// Mints or burns supply of an existing mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicSupplyChangeBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub delta: u64,
    pub action: MosaicSupplyChangeAction,
}

/// Links or unlinks a namespace alias to a mosaic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicAliasBody {
    pub action: AliasAction,
    pub namespace_id: NamespaceId,
    pub mosaic_id: MosaicId,
}

/// Links or unlinks a namespace alias to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAliasBody {
    pub action: AliasAction,
    pub namespace_id: NamespaceId,
    pub address: Address,
}

/// Registers a root or child namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRegistrationBody {
    pub registration: NamespaceRegistration,
    pub id: NamespaceId,
    /// UTF-8 name part, at most 255 bytes (count-prefixed on the wire).
    pub name: String,
}

/// Links a remote account for delegated harvesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLinkBody {
    pub remote_public_key: PublicKey,
    pub action: LinkAction,
}

/// One entry of an account restriction list change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionModification<T> {
    pub action: RestrictionModificationAction,
    pub value: T,
}

/// Changes the address allow/block list of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAddressRestrictionBody {
    pub restriction_type: AccountRestrictionType,
    pub modifications: Vec<RestrictionModification<UnresolvedAddress>>,
}

/// Changes the mosaic allow/block list of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMosaicRestrictionBody {
    pub restriction_type: AccountRestrictionType,
    pub modifications: Vec<RestrictionModification<UnresolvedMosaicId>>,
}

/// Changes the transaction-type allow/block list of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOperationRestrictionBody {
    pub restriction_type: AccountRestrictionType,
    pub modifications: Vec<RestrictionModification<TransactionType>>,
}

/// Sets a per-address restriction value on a mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicAddressRestrictionBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub restriction_key: u64,
    pub target_address: UnresolvedAddress,
    pub previous_value: u64,
    pub new_value: u64,
}

/// Sets a global restriction rule on a mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicGlobalRestrictionBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub reference_mosaic_id: UnresolvedMosaicId,
    pub restriction_key: u64,
    pub previous_value: u64,
    pub previous_type: MosaicRestrictionType,
    pub new_value: u64,
    pub new_type: MosaicRestrictionType,
}

/// Attaches metadata to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadataBody {
    pub target_public_key: PublicKey,
    pub scoped_metadata_key: u64,
    /// Change in value length relative to the previous value; signed.
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

/// Attaches metadata to a mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicMetadataBody {
    pub target_public_key: PublicKey,
    pub scoped_metadata_key: u64,
    pub target_mosaic_id: UnresolvedMosaicId,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

/// Attaches metadata to a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceMetadataBody {
    pub target_public_key: PublicKey,
    pub scoped_metadata_key: u64,
    pub target_namespace_id: NamespaceId,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

/// Converts an account to multisig or changes its cosignatory set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigAccountModificationBody {
    pub min_removal_delta: i8,
    pub min_approval_delta: i8,
    /// Public keys added as cosignatories.
    pub additions: Vec<PublicKey>,
    /// Public keys removed as cosignatories. A non-empty list switches the
    /// quorum check from `min_approval` to `min_removal`.
    pub deletions: Vec<PublicKey>,
}

/// Locks funds against a bonded aggregate hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLockBody {
    pub mosaic: Mosaic,
    pub duration: u64,
    pub hash: Hash256,
}

/// Locks funds behind a hashed secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretLockBody {
    pub mosaic: Mosaic,
    pub duration: u64,
    pub hash_algorithm: LockHashAlgorithm,
    pub secret: Hash256,
    pub recipient: UnresolvedAddress,
}

/// Reveals the preimage of a secret lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretProofBody {
    pub hash_algorithm: LockHashAlgorithm,
    pub secret: Hash256,
    pub recipient: UnresolvedAddress,
    pub proof: Vec<u8>,
}

/// The recursive aggregate payload: inner transactions plus cosignatures.
///
/// Inner transaction order is significant (it is part of what
/// `transactions_hash` commits to), so the list is kept exactly as given.
/// The hash itself is computed by the signing layer and carried here as
/// opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBody {
    pub transactions_hash: Hash256,
    pub transactions: Vec<EmbeddedTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

// ---------------------------------------------------------------------------
// TransactionBody
// ---------------------------------------------------------------------------

/// The closed sum of all transaction payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionBody {
    Transfer(TransferBody),
    MosaicDefinition(MosaicDefinitionBody),
    MosaicSupplyChange(MosaicSupplyChangeBody),
    MosaicAlias(MosaicAliasBody),
    NamespaceRegistration(NamespaceRegistrationBody),
    AddressAlias(AddressAliasBody),
    AccountLink(AccountLinkBody),
    AccountAddressRestriction(AccountAddressRestrictionBody),
    AccountMosaicRestriction(AccountMosaicRestrictionBody),
    AccountOperationRestriction(AccountOperationRestrictionBody),
    MosaicAddressRestriction(MosaicAddressRestrictionBody),
    MosaicGlobalRestriction(MosaicGlobalRestrictionBody),
    AccountMetadata(AccountMetadataBody),
    MosaicMetadata(MosaicMetadataBody),
    NamespaceMetadata(NamespaceMetadataBody),
    MultisigAccountModification(MultisigAccountModificationBody),
    HashLock(HashLockBody),
    SecretLock(SecretLockBody),
    SecretProof(SecretProofBody),
    AggregateComplete(AggregateBody),
    AggregateBonded(AggregateBody),
}

impl TransactionBody {
    /// The wire type code this body serializes under.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer(_) => TransactionType::Transfer,
            Self::MosaicDefinition(_) => TransactionType::MosaicDefinition,
            Self::MosaicSupplyChange(_) => TransactionType::MosaicSupplyChange,
            Self::MosaicAlias(_) => TransactionType::MosaicAlias,
            Self::NamespaceRegistration(_) => TransactionType::NamespaceRegistration,
            Self::AddressAlias(_) => TransactionType::AddressAlias,
            Self::AccountLink(_) => TransactionType::AccountLink,
            Self::AccountAddressRestriction(_) => TransactionType::AccountAddressRestriction,
            Self::AccountMosaicRestriction(_) => TransactionType::AccountMosaicRestriction,
            Self::AccountOperationRestriction(_) => TransactionType::AccountOperationRestriction,
            Self::MosaicAddressRestriction(_) => TransactionType::MosaicAddressRestriction,
            Self::MosaicGlobalRestriction(_) => TransactionType::MosaicGlobalRestriction,
            Self::AccountMetadata(_) => TransactionType::AccountMetadata,
            Self::MosaicMetadata(_) => TransactionType::MosaicMetadata,
            Self::NamespaceMetadata(_) => TransactionType::NamespaceMetadata,
            Self::MultisigAccountModification(_) => TransactionType::MultisigAccountModification,
            Self::HashLock(_) => TransactionType::HashLock,
            Self::SecretLock(_) => TransactionType::SecretLock,
            Self::SecretProof(_) => TransactionType::SecretProof,
            Self::AggregateComplete(_) => TransactionType::AggregateComplete,
            Self::AggregateBonded(_) => TransactionType::AggregateBonded,
        }
    }

    /// The aggregate payload, if this is one of the two aggregate kinds.
    pub fn as_aggregate(&self) -> Option<&AggregateBody> {
        match self {
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => Some(body),
            _ => None,
        }
    }

    /// `true` if this is a multisig modification that removes cosignatories.
    /// Removal quorums are counted against `min_removal` instead of
    /// `min_approval`.
    pub fn is_multisig_removal(&self) -> bool {
        matches!(
            self,
            Self::MultisigAccountModification(body) if !body.deletions.is_empty()
        )
    }
}
