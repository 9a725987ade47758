//! Binary transaction codec.
//!
//! [`serialize`] and [`deserialize`] convert between [`Transaction`] values
//! and the exact byte layout the network announces and gossips;
//! [`serialize_embedded`] and [`deserialize_embedded`] do the same for the
//! inner transactions carried by an aggregate. Serialization is canonical:
//! for any decodable payload, decode-then-encode reproduces the input
//! byte-for-byte.
//!
//! Dispatch over transaction kinds is a single exhaustive `match` on
//! [`TransactionBody`]; the compiler, not a registry, guarantees every kind
//! has a codec.

use crate::model::{ModelError, NetworkType};
use crate::transaction::{EmbeddedTransaction, Transaction, TransactionBody};

mod account;
mod aggregate;
mod header;
mod lock;
mod metadata;
mod mosaic;
mod namespace;
mod primitive;
mod restriction;
mod transfer;

pub use header::{EMBEDDED_HEADER_SIZE, HEADER_SIZE};
pub use primitive::{ByteReader, ByteWriter};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while encoding or decoding transaction payloads.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unexpected end of payload: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("unsupported transaction type code 0x{0:04x}")]
    UnsupportedTransactionType(u16),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid {field} value 0x{value:02x}")]
    InvalidEnumValue { field: &'static str, value: u8 },

    #[error("{field} too long: {actual} exceeds the wire maximum of {max}")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("declared size {declared} does not match the {actual} bytes present")]
    SizeMismatch { declared: u32, actual: usize },

    #[error("{0} unparseable trailing bytes")]
    TrailingBytes(usize),

    #[error("aggregate transactions cannot contain another aggregate")]
    NestedAggregate,

    #[error("embedded transactions require a signer")]
    MissingSigner,

    #[error("namespace name is not valid utf-8")]
    InvalidName,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Total serialized size of `tx`, header included.
pub fn size_of(tx: &Transaction) -> usize {
    HEADER_SIZE + body_size(&tx.body)
}

/// Serialized size of `tx` in its embedded form, before aggregate padding.
pub fn embedded_size_of(tx: &EmbeddedTransaction) -> usize {
    EMBEDDED_HEADER_SIZE + body_size(&tx.body)
}

/// Serializes a top-level transaction to its announceable payload.
pub fn serialize(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
    let total = size_of(tx);
    let total_u32 = u32::try_from(total).map_err(|_| CodecError::FieldTooLong {
        field: "transaction",
        actual: total,
        max: u32::MAX as usize,
    })?;
    let mut w = ByteWriter::with_capacity(total);
    header::write_header(&mut w, tx, total_u32);
    encode_body(&mut w, &tx.body, tx.network)?;
    debug_assert_eq!(w.len(), total);
    tracing::trace!(
        transaction_type = %tx.transaction_type(),
        size = total,
        "serialized transaction"
    );
    Ok(w.into_inner())
}

/// Deserializes a top-level transaction payload.
///
/// The declared size must match the slice length exactly, and every byte
/// must be consumed; payloads with trailing garbage are rejected rather
/// than silently truncated.
pub fn deserialize(bytes: &[u8]) -> Result<Transaction, CodecError> {
    let mut r = ByteReader::new(bytes);
    let header = header::read_header(&mut r)?;
    if header.declared_size as usize != bytes.len() {
        return Err(CodecError::SizeMismatch {
            declared: header.declared_size,
            actual: bytes.len(),
        });
    }
    let body = decode_body(&mut r, header.transaction_type)?;
    if !r.is_empty() {
        return Err(CodecError::TrailingBytes(r.remaining()));
    }
    tracing::trace!(
        transaction_type = %header.transaction_type,
        size = bytes.len(),
        "deserialized transaction"
    );
    Ok(Transaction {
        network: header.network,
        version: header.version,
        max_fee: header.max_fee,
        deadline: header.deadline,
        signature: header.signature,
        signer: header.signer,
        body,
    })
}

/// Serializes a transaction in its embedded (aggregate inner) form.
pub fn serialize_embedded(tx: &EmbeddedTransaction) -> Result<Vec<u8>, CodecError> {
    let mut w = ByteWriter::with_capacity(embedded_size_of(tx));
    write_embedded(&mut w, tx)?;
    Ok(w.into_inner())
}

/// Deserializes a single embedded transaction from `bytes`.
pub fn deserialize_embedded(bytes: &[u8]) -> Result<EmbeddedTransaction, CodecError> {
    let mut r = ByteReader::new(bytes);
    let tx = read_embedded(&mut r)?;
    if !r.is_empty() {
        return Err(CodecError::TrailingBytes(r.remaining()));
    }
    Ok(tx)
}

// ---------------------------------------------------------------------------
// Embedded framing
// ---------------------------------------------------------------------------

fn write_embedded(w: &mut ByteWriter, tx: &EmbeddedTransaction) -> Result<(), CodecError> {
    if tx.transaction_type().is_aggregate() {
        return Err(CodecError::NestedAggregate);
    }
    if tx.signer.is_none() {
        return Err(CodecError::MissingSigner);
    }
    let total = embedded_size_of(tx);
    let total_u32 = u32::try_from(total).map_err(|_| CodecError::FieldTooLong {
        field: "embedded transaction",
        actual: total,
        max: u32::MAX as usize,
    })?;
    header::write_embedded_header(w, tx, total_u32);
    encode_body(w, &tx.body, tx.network)
}

/// Reads one embedded transaction from the reader's current position,
/// leaving the cursor just past it. Reentrant form of
/// [`deserialize_embedded`] for callers walking a larger buffer.
pub fn read_embedded(r: &mut ByteReader<'_>) -> Result<EmbeddedTransaction, CodecError> {
    let header = header::read_embedded_header(r)?;
    if header.transaction_type.is_aggregate() {
        return Err(CodecError::NestedAggregate);
    }
    let declared = header.declared_size as usize;
    let body_len = declared
        .checked_sub(EMBEDDED_HEADER_SIZE)
        .ok_or(CodecError::SizeMismatch {
            declared: header.declared_size,
            actual: EMBEDDED_HEADER_SIZE,
        })?;
    let mut body_reader = r.sub_reader(body_len)?;
    let body = decode_body(&mut body_reader, header.transaction_type)?;
    if !body_reader.is_empty() {
        return Err(CodecError::TrailingBytes(body_reader.remaining()));
    }
    Ok(EmbeddedTransaction {
        network: header.network,
        version: header.version,
        signer: header.signer,
        body,
    })
}

// ---------------------------------------------------------------------------
// Body dispatch
// ---------------------------------------------------------------------------

fn body_size(body: &TransactionBody) -> usize {
    match body {
        TransactionBody::Transfer(b) => transfer::size(b),
        TransactionBody::MosaicDefinition(_) => mosaic::DEFINITION_SIZE,
        TransactionBody::MosaicSupplyChange(_) => mosaic::SUPPLY_CHANGE_SIZE,
        TransactionBody::MosaicAlias(_) => mosaic::ALIAS_SIZE,
        TransactionBody::NamespaceRegistration(b) => namespace::registration_size(b),
        TransactionBody::AddressAlias(_) => namespace::ADDRESS_ALIAS_SIZE,
        TransactionBody::AccountLink(_) => account::LINK_SIZE,
        TransactionBody::AccountAddressRestriction(b) => restriction::address_restriction_size(b),
        TransactionBody::AccountMosaicRestriction(b) => restriction::mosaic_restriction_size(b),
        TransactionBody::AccountOperationRestriction(b) => {
            restriction::operation_restriction_size(b)
        }
        TransactionBody::MosaicAddressRestriction(_) => {
            restriction::MOSAIC_ADDRESS_RESTRICTION_SIZE
        }
        TransactionBody::MosaicGlobalRestriction(_) => restriction::MOSAIC_GLOBAL_RESTRICTION_SIZE,
        TransactionBody::AccountMetadata(b) => metadata::account_size(b),
        TransactionBody::MosaicMetadata(b) => metadata::mosaic_size(b),
        TransactionBody::NamespaceMetadata(b) => metadata::namespace_size(b),
        TransactionBody::MultisigAccountModification(b) => account::multisig_size(b),
        TransactionBody::HashLock(_) => lock::HASH_LOCK_SIZE,
        TransactionBody::SecretLock(_) => lock::SECRET_LOCK_SIZE,
        TransactionBody::SecretProof(b) => lock::secret_proof_size(b),
        TransactionBody::AggregateComplete(b) | TransactionBody::AggregateBonded(b) => {
            aggregate::size(b)
        }
    }
}

fn encode_body(
    w: &mut ByteWriter,
    body: &TransactionBody,
    network: NetworkType,
) -> Result<(), CodecError> {
    match body {
        TransactionBody::Transfer(b) => transfer::encode(w, b, network)?,
        TransactionBody::MosaicDefinition(b) => mosaic::encode_definition(w, b),
        TransactionBody::MosaicSupplyChange(b) => mosaic::encode_supply_change(w, b),
        TransactionBody::MosaicAlias(b) => mosaic::encode_alias(w, b),
        TransactionBody::NamespaceRegistration(b) => namespace::encode_registration(w, b)?,
        TransactionBody::AddressAlias(b) => namespace::encode_address_alias(w, b),
        TransactionBody::AccountLink(b) => account::encode_link(w, b),
        TransactionBody::AccountAddressRestriction(b) => {
            restriction::encode_address_restriction(w, b, network)?
        }
        TransactionBody::AccountMosaicRestriction(b) => {
            restriction::encode_mosaic_restriction(w, b)?
        }
        TransactionBody::AccountOperationRestriction(b) => {
            restriction::encode_operation_restriction(w, b)?
        }
        TransactionBody::MosaicAddressRestriction(b) => {
            restriction::encode_mosaic_address_restriction(w, b, network)
        }
        TransactionBody::MosaicGlobalRestriction(b) => {
            restriction::encode_mosaic_global_restriction(w, b)
        }
        TransactionBody::AccountMetadata(b) => metadata::encode_account(w, b)?,
        TransactionBody::MosaicMetadata(b) => metadata::encode_mosaic(w, b)?,
        TransactionBody::NamespaceMetadata(b) => metadata::encode_namespace(w, b)?,
        TransactionBody::MultisigAccountModification(b) => account::encode_multisig(w, b)?,
        TransactionBody::HashLock(b) => lock::encode_hash_lock(w, b),
        TransactionBody::SecretLock(b) => lock::encode_secret_lock(w, b, network),
        TransactionBody::SecretProof(b) => lock::encode_secret_proof(w, b, network)?,
        TransactionBody::AggregateComplete(b) | TransactionBody::AggregateBonded(b) => {
            aggregate::encode(w, b)?
        }
    }
    Ok(())
}

fn decode_body(
    r: &mut ByteReader<'_>,
    transaction_type: crate::transaction::TransactionType,
) -> Result<TransactionBody, CodecError> {
    use crate::transaction::TransactionType as T;
    Ok(match transaction_type {
        T::Transfer => TransactionBody::Transfer(transfer::decode(r)?),
        T::MosaicDefinition => TransactionBody::MosaicDefinition(mosaic::decode_definition(r)?),
        T::MosaicSupplyChange => {
            TransactionBody::MosaicSupplyChange(mosaic::decode_supply_change(r)?)
        }
        T::MosaicAlias => TransactionBody::MosaicAlias(mosaic::decode_alias(r)?),
        T::NamespaceRegistration => {
            TransactionBody::NamespaceRegistration(namespace::decode_registration(r)?)
        }
        T::AddressAlias => TransactionBody::AddressAlias(namespace::decode_address_alias(r)?),
        T::AccountLink => TransactionBody::AccountLink(account::decode_link(r)?),
        T::AccountAddressRestriction => {
            TransactionBody::AccountAddressRestriction(restriction::decode_address_restriction(r)?)
        }
        T::AccountMosaicRestriction => {
            TransactionBody::AccountMosaicRestriction(restriction::decode_mosaic_restriction(r)?)
        }
        T::AccountOperationRestriction => TransactionBody::AccountOperationRestriction(
            restriction::decode_operation_restriction(r)?,
        ),
        T::MosaicAddressRestriction => TransactionBody::MosaicAddressRestriction(
            restriction::decode_mosaic_address_restriction(r)?,
        ),
        T::MosaicGlobalRestriction => TransactionBody::MosaicGlobalRestriction(
            restriction::decode_mosaic_global_restriction(r)?,
        ),
        T::AccountMetadata => TransactionBody::AccountMetadata(metadata::decode_account(r)?),
        T::MosaicMetadata => TransactionBody::MosaicMetadata(metadata::decode_mosaic(r)?),
        T::NamespaceMetadata => TransactionBody::NamespaceMetadata(metadata::decode_namespace(r)?),
        T::MultisigAccountModification => {
            TransactionBody::MultisigAccountModification(account::decode_multisig(r)?)
        }
        T::HashLock => TransactionBody::HashLock(lock::decode_hash_lock(r)?),
        T::SecretLock => TransactionBody::SecretLock(lock::decode_secret_lock(r)?),
        T::SecretProof => TransactionBody::SecretProof(lock::decode_secret_proof(r)?),
        T::AggregateComplete => TransactionBody::AggregateComplete(aggregate::decode(r)?),
        T::AggregateBonded => TransactionBody::AggregateBonded(aggregate::decode(r)?),
    })
}

// ---------------------------------------------------------------------------
// Reference payload tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Address, Hash256, Message, Mosaic, NetworkType, PublicKey, Signature, UnresolvedAddress,
        UnresolvedMosaicId,
    };
    use crate::transaction::{
        AggregateBody, Cosignature, EmbeddedTransaction, MosaicSupplyChangeAction,
        MosaicSupplyChangeBody, TransactionBuilder, TransactionType, TransferBody,
        TRANSACTION_VERSION,
    };

    const SIGNER_HEX: &str = "9a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b24";
    const RECIPIENT_HEX: &str = "90e8febd671dd41bee94ec3ba5831cb608a312c2f203ba84ac";
    const TRANSACTIONS_HASH_HEX: &str =
        "e308d7404d8087f995b5c41b671a5c07861e1f8892b10a9cec8526d09e167f52";

    const EMPTY_BONDED_HEX: &str = "a80000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000019041420000000000000000010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

    const TWO_TRANSACTION_HEX: &str = "6001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000190414200000000000000000100000000000000e308d7404d8087f995b5c41b671a5c07861e1f8892b10a9cec8526d09e167f52b8000000000000006d000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b24000000000190544190e8febd671dd41bee94ec3ba5831cb608a312c2f203ba84ac010d0000000000672b0000ce560000640000000000000000536f6d65204d65737361676500000041000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b240000000001904d428869746e9b1a70570a000000000000000100000000000000";

    const THREE_COSIGNATURE_HEX: &str = "c801000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000190414100000000000000000100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea654561119a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea654562229a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456333ccc9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222";

    const TWO_TRANSACTION_TWO_COSIGNATURE_HEX: &str = "2002000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000190414200000000000000000100000000000000e308d7404d8087f995b5c41b671a5c07861e1f8892b10a9cec8526d09e167f52b8000000000000006d000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b24000000000190544190e8febd671dd41bee94ec3ba5831cb608a312c2f203ba84ac010d0000000000672b0000ce560000640000000000000000536f6d65204d65737361676500000041000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b240000000001904d428869746e9b1a70570a0000000000000001000000000000009a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea654561119a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222";

    fn inner_transfer() -> EmbeddedTransaction {
        EmbeddedTransaction {
            network: NetworkType::PrivateTest,
            version: TRANSACTION_VERSION,
            signer: Some(PublicKey::from_hex(SIGNER_HEX).unwrap()),
            body: crate::transaction::TransactionBody::Transfer(TransferBody {
                recipient: UnresolvedAddress::Address(Address::from_hex(RECIPIENT_HEX).unwrap()),
                mosaics: vec![Mosaic::new(UnresolvedMosaicId(95442763262823), 100)],
                message: Some(Message::plain("Some Message")),
            }),
        }
    }

    fn inner_supply_change() -> EmbeddedTransaction {
        EmbeddedTransaction {
            network: NetworkType::PrivateTest,
            version: TRANSACTION_VERSION,
            signer: Some(PublicKey::from_hex(SIGNER_HEX).unwrap()),
            body: crate::transaction::TransactionBody::MosaicSupplyChange(
                MosaicSupplyChangeBody {
                    mosaic_id: UnresolvedMosaicId(6300565133566699912),
                    delta: 10,
                    action: MosaicSupplyChangeAction::Increase,
                },
            ),
        }
    }

    fn cosignature(signer_hex: &str, signature_hex: &str) -> Cosignature {
        Cosignature {
            signer: PublicKey::from_hex(signer_hex).unwrap(),
            signature: Signature::from_hex(signature_hex).unwrap(),
        }
    }

    fn reference_cosignatures() -> Vec<Cosignature> {
        vec![
            cosignature(
                "9a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111",
                "aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111aaa9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456111",
            ),
            cosignature(
                "9a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222",
                "bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222",
            ),
            cosignature(
                "9a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456333",
                "ccc9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222bbb9366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456222",
            ),
        ]
    }

    fn aggregate(
        transaction_type: TransactionType,
        transactions_hash: Hash256,
        transactions: Vec<EmbeddedTransaction>,
        cosignatures: Vec<Cosignature>,
    ) -> crate::transaction::Transaction {
        let body = AggregateBody {
            transactions_hash,
            transactions,
            cosignatures,
        };
        let body = match transaction_type {
            TransactionType::AggregateComplete => {
                crate::transaction::TransactionBody::AggregateComplete(body)
            }
            _ => crate::transaction::TransactionBody::AggregateBonded(body),
        };
        TransactionBuilder::new(NetworkType::PrivateTest, body)
            .deadline(1)
            .build()
    }

    fn assert_reference(expected_hex: &str, tx: &crate::transaction::Transaction) {
        let bytes = serialize(tx).unwrap();
        assert_eq!(hex::encode(&bytes), expected_hex);
        let decoded = deserialize(&bytes).unwrap();
        assert_eq!(&decoded, tx);
        assert_eq!(hex::encode(serialize(&decoded).unwrap()), expected_hex);
    }

    #[test]
    fn empty_bonded_aggregate_matches_reference() {
        let tx = aggregate(
            TransactionType::AggregateBonded,
            Hash256::default(),
            vec![],
            vec![],
        );
        assert_eq!(size_of(&tx), 168);
        assert_reference(EMPTY_BONDED_HEX, &tx);
    }

    #[test]
    fn two_inner_transactions_match_reference() {
        let tx = aggregate(
            TransactionType::AggregateBonded,
            Hash256::from_hex(TRANSACTIONS_HASH_HEX).unwrap(),
            vec![inner_transfer(), inner_supply_change()],
            vec![],
        );
        assert_eq!(size_of(&tx), 352);
        assert_reference(TWO_TRANSACTION_HEX, &tx);

        let decoded = deserialize(&serialize(&tx).unwrap()).unwrap();
        let inner = &decoded.as_aggregate().unwrap().transactions;
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0].transaction_type(), TransactionType::Transfer);
        assert_eq!(
            inner[1].transaction_type(),
            TransactionType::MosaicSupplyChange
        );
    }

    #[test]
    fn three_cosignatures_match_reference() {
        let tx = aggregate(
            TransactionType::AggregateComplete,
            Hash256::default(),
            vec![],
            reference_cosignatures(),
        );
        assert_eq!(size_of(&tx), 456);
        assert_reference(THREE_COSIGNATURE_HEX, &tx);
    }

    #[test]
    fn transactions_and_cosignatures_match_reference() {
        let tx = aggregate(
            TransactionType::AggregateBonded,
            Hash256::from_hex(TRANSACTIONS_HASH_HEX).unwrap(),
            vec![inner_transfer(), inner_supply_change()],
            reference_cosignatures()[..2].to_vec(),
        );
        assert_eq!(size_of(&tx), 544);
        assert_reference(TWO_TRANSACTION_TWO_COSIGNATURE_HEX, &tx);
    }

    #[test]
    fn embedded_transfer_matches_reference_slice() {
        // offset 168 into the two-transaction payload, 109 bytes
        let full = hex::decode(TWO_TRANSACTION_HEX).unwrap();
        let expected = &full[168..168 + 109];
        let bytes = serialize_embedded(&inner_transfer()).unwrap();
        assert_eq!(bytes, expected);
        assert_eq!(deserialize_embedded(&bytes).unwrap(), inner_transfer());
    }

    #[test]
    fn declared_size_must_match_input() {
        let tx = aggregate(
            TransactionType::AggregateBonded,
            Hash256::default(),
            vec![],
            vec![],
        );
        let mut bytes = serialize(&tx).unwrap();
        bytes.push(0);
        assert!(matches!(
            deserialize(&bytes),
            Err(CodecError::SizeMismatch {
                declared: 168,
                actual: 169
            })
        ));
    }

    #[test]
    fn nested_aggregates_are_rejected() {
        let inner = EmbeddedTransaction {
            network: NetworkType::PrivateTest,
            version: TRANSACTION_VERSION,
            signer: Some(PublicKey::from_bytes([1; 32])),
            body: crate::transaction::TransactionBody::AggregateComplete(AggregateBody {
                transactions_hash: Hash256::default(),
                transactions: vec![],
                cosignatures: vec![],
            }),
        };
        assert!(matches!(
            serialize_embedded(&inner),
            Err(CodecError::NestedAggregate)
        ));

        let tx = aggregate(
            TransactionType::AggregateBonded,
            Hash256::default(),
            vec![inner],
            vec![],
        );
        assert!(matches!(serialize(&tx), Err(CodecError::NestedAggregate)));
    }

    #[test]
    fn embedded_serialization_requires_a_signer() {
        let mut inner = inner_transfer();
        inner.signer = None;
        assert!(matches!(
            serialize_embedded(&inner),
            Err(CodecError::MissingSigner)
        ));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let full = hex::decode(TWO_TRANSACTION_HEX).unwrap();
        assert!(deserialize(&full[..100]).is_err());
    }
}
