//! Transaction construction.
//!
//! A [`Transaction`] is immutable once built; all mutation happens on the
//! [`TransactionBuilder`]. Signing happens outside this crate: the builder
//! accepts an already-computed signature and signer, or leaves them unset,
//! in which case the codec writes the all-zero sentinel bytes.

use serde::{Deserialize, Serialize};

use crate::model::{Hash256, NetworkType, PublicKey, Signature};

use super::bodies::{AggregateBody, TransactionBody};
use super::types::TransactionType;

/// Wire version written for every transaction this build produces.
pub const TRANSACTION_VERSION: u8 = 1;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Converting to an embedded transaction requires a signer: the embedded
    /// wire header has no signature, so the signer key is the only thing
    /// tying the inner transaction to an account.
    #[error("cannot embed a transaction without a signer")]
    MissingSigner,

    /// Aggregates cannot nest. The wire format has no recursion depth field,
    /// and the node rejects such payloads outright.
    #[error("aggregate transactions cannot be embedded in another aggregate")]
    NestedAggregate,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A top-level transaction, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub network: NetworkType,
    pub version: u8,
    /// Fee cap in the network currency's smallest unit.
    pub max_fee: u64,
    /// Expiry timestamp, milliseconds since the network epoch.
    pub deadline: u64,
    /// `None` until signed; serialized as 64 zero bytes.
    pub signature: Option<Signature>,
    /// `None` until signed; serialized as 32 zero bytes.
    pub signer: Option<PublicKey>,
    pub body: TransactionBody,
}

impl Transaction {
    /// The wire type code, derived from the body.
    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    /// The aggregate payload, if this is an aggregate transaction.
    pub fn as_aggregate(&self) -> Option<&AggregateBody> {
        self.body.as_aggregate()
    }

    /// Converts to the embedded form carried inside an aggregate.
    ///
    /// Drops the signature, fee and deadline (the outer aggregate owns
    /// those) and requires a signer. Aggregates themselves cannot be
    /// embedded.
    pub fn to_embedded(&self) -> Result<EmbeddedTransaction, TransactionError> {
        if self.transaction_type().is_aggregate() {
            return Err(TransactionError::NestedAggregate);
        }
        let signer = self.signer.ok_or(TransactionError::MissingSigner)?;
        Ok(EmbeddedTransaction {
            network: self.network,
            version: self.version,
            signer: Some(signer),
            body: self.body.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// EmbeddedTransaction
// ---------------------------------------------------------------------------

/// A transaction carried inside an aggregate.
///
/// Embedded transactions have no signature, fee or deadline of their own;
/// the enclosing aggregate covers all three. The signer is `None` only for
/// payloads decoded from the wire with the all-zero placeholder key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedTransaction {
    pub network: NetworkType,
    pub version: u8,
    pub signer: Option<PublicKey>,
    pub body: TransactionBody,
}

impl EmbeddedTransaction {
    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }
}

// ---------------------------------------------------------------------------
// Cosignature
// ---------------------------------------------------------------------------

/// One cosignatory's approval of an aggregate: 96 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosignature {
    pub signer: PublicKey,
    pub signature: Signature,
}

// ---------------------------------------------------------------------------
// SignedTransaction
// ---------------------------------------------------------------------------

/// The announce-ready form of a transaction: serialized payload plus the
/// hash the network will know it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Full serialized payload, exactly as announced to a node.
    pub payload: Vec<u8>,
    pub hash: Hash256,
    pub signer: PublicKey,
    pub transaction_type: TransactionType,
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent constructor for [`Transaction`].
///
/// ```
/// use helix_sdk::model::{Message, NetworkType, UnresolvedAddress, Address};
/// use helix_sdk::transaction::{TransactionBuilder, TransactionBody, TransferBody};
///
/// let tx = TransactionBuilder::new(
///     NetworkType::PrivateTest,
///     TransactionBody::Transfer(TransferBody {
///         recipient: UnresolvedAddress::Address(Address::default()),
///         mosaics: vec![],
///         message: Some(Message::plain("hi")),
///     }),
/// )
/// .deadline(1)
/// .build();
/// assert_eq!(tx.max_fee, 0);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    network: NetworkType,
    version: u8,
    max_fee: u64,
    deadline: u64,
    signature: Option<Signature>,
    signer: Option<PublicKey>,
    body: TransactionBody,
}

impl TransactionBuilder {
    /// Starts a builder for `body` on `network`. Version defaults to
    /// [`TRANSACTION_VERSION`], fee and deadline to zero, signature and
    /// signer to unset.
    pub fn new(network: NetworkType, body: TransactionBody) -> Self {
        Self {
            network,
            version: TRANSACTION_VERSION,
            max_fee: 0,
            deadline: 0,
            signature: None,
            signer: None,
            body,
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn max_fee(mut self, max_fee: u64) -> Self {
        self.max_fee = max_fee;
        self
    }

    pub fn deadline(mut self, deadline: u64) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn signer(mut self, signer: PublicKey) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Transaction {
        Transaction {
            network: self.network,
            version: self.version,
            max_fee: self.max_fee,
            deadline: self.deadline,
            signature: self.signature,
            signer: self.signer,
            body: self.body,
        }
    }
}
