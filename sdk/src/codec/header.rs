//! The common transaction headers.
//!
//! Top-level and embedded transactions share a tail (version, network,
//! type) but differ in front: the top-level header carries the signature,
//! fee and deadline, while the embedded header is a bare signer. Both
//! start with the full entity size and pad with reserved words so that
//! the signed region starts 8-byte aligned.

use crate::model::{NetworkType, PublicKey, Signature};
use crate::transaction::{EmbeddedTransaction, Transaction, TransactionType};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

/// Top-level header width: size, reserved, signature, signer, reserved,
/// version, network, type, max fee, deadline.
pub const HEADER_SIZE: usize = 4 + 4 + 64 + 32 + 4 + 1 + 1 + 2 + 8 + 8;

/// Embedded header width: size, reserved, signer, reserved, version,
/// network, type.
pub const EMBEDDED_HEADER_SIZE: usize = 4 + 4 + 32 + 4 + 1 + 1 + 2;

// ---------------------------------------------------------------------------
// Top-level header
// ---------------------------------------------------------------------------

/// Decoded fields of a top-level header.
pub struct TransactionHeader {
    /// Total entity size as declared on the wire, header included.
    pub declared_size: u32,
    /// `None` when the wire carried the all-zero placeholder.
    pub signature: Option<Signature>,
    /// `None` when the wire carried the all-zero placeholder.
    pub signer: Option<PublicKey>,
    pub version: u8,
    pub network: NetworkType,
    pub transaction_type: TransactionType,
    pub max_fee: u64,
    pub deadline: u64,
}

pub fn write_header(w: &mut ByteWriter, tx: &Transaction, total_size: u32) {
    w.write_u32(total_size);
    w.write_u32(0);
    w.write_optional_signature(tx.signature.as_ref());
    w.write_optional_public_key(tx.signer.as_ref());
    w.write_u32(0);
    w.write_u8(tx.version);
    w.write_u8(tx.network as u8);
    w.write_u16(tx.transaction_type().code());
    w.write_u64(tx.max_fee);
    w.write_u64(tx.deadline);
}

pub fn read_header(r: &mut ByteReader<'_>) -> Result<TransactionHeader, CodecError> {
    let declared_size = r.read_u32()?;
    r.read_u32()?;
    let signature = r.read_signature()?;
    let signer = r.read_public_key()?;
    r.read_u32()?;
    let version = r.read_u8()?;
    let network = NetworkType::from_raw(r.read_u8()?)?;
    let code = r.read_u16()?;
    let transaction_type =
        TransactionType::from_code(code).ok_or(CodecError::UnsupportedTransactionType(code))?;
    let max_fee = r.read_u64()?;
    let deadline = r.read_u64()?;
    Ok(TransactionHeader {
        declared_size,
        signature: (!signature.is_zero()).then_some(signature),
        signer: (!signer.is_zero()).then_some(signer),
        version,
        network,
        transaction_type,
        max_fee,
        deadline,
    })
}

// ---------------------------------------------------------------------------
// Embedded header
// ---------------------------------------------------------------------------

/// Decoded fields of an embedded header.
pub struct EmbeddedHeader {
    pub declared_size: u32,
    pub signer: Option<PublicKey>,
    pub version: u8,
    pub network: NetworkType,
    pub transaction_type: TransactionType,
}

pub fn write_embedded_header(w: &mut ByteWriter, tx: &EmbeddedTransaction, total_size: u32) {
    w.write_u32(total_size);
    w.write_u32(0);
    w.write_optional_public_key(tx.signer.as_ref());
    w.write_u32(0);
    w.write_u8(tx.version);
    w.write_u8(tx.network as u8);
    w.write_u16(tx.transaction_type().code());
}

pub fn read_embedded_header(r: &mut ByteReader<'_>) -> Result<EmbeddedHeader, CodecError> {
    let declared_size = r.read_u32()?;
    r.read_u32()?;
    let signer = r.read_public_key()?;
    r.read_u32()?;
    let version = r.read_u8()?;
    let network = NetworkType::from_raw(r.read_u8()?)?;
    let code = r.read_u16()?;
    let transaction_type =
        TransactionType::from_code(code).ok_or(CodecError::UnsupportedTransactionType(code))?;
    Ok(EmbeddedHeader {
        declared_size,
        signer: (!signer.is_zero()).then_some(signer),
        version,
        network,
        transaction_type,
    })
}
