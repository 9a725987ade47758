//! Transaction types: the closed set of transaction kinds, their bodies,
//! and the builder that assembles them.

pub mod bodies;
pub mod builder;
pub mod types;

pub use bodies::{
    AccountAddressRestrictionBody, AccountLinkBody, AccountMetadataBody,
    AccountMosaicRestrictionBody, AccountOperationRestrictionBody, AddressAliasBody,
    AggregateBody, HashLockBody, MosaicAddressRestrictionBody, MosaicAliasBody,
    MosaicDefinitionBody, MosaicGlobalRestrictionBody, MosaicMetadataBody,
    MosaicSupplyChangeBody, MultisigAccountModificationBody, NamespaceMetadataBody,
    NamespaceRegistrationBody, RestrictionModification, SecretLockBody, SecretProofBody,
    TransactionBody, TransferBody,
};
pub use builder::{
    Cosignature, EmbeddedTransaction, SignedTransaction, Transaction, TransactionBuilder,
    TransactionError, TRANSACTION_VERSION,
};
pub use types::{
    AccountRestrictionType, LinkAction, LockHashAlgorithm, MosaicRestrictionType,
    MosaicSupplyChangeAction, RestrictionModificationAction, TransactionType,
};
