//! Aggregate body layout.
//!
//! `transactionsHash[32] | payloadSize[4] | reserved[4] | inner txs |
//! cosignatures[96 each]`
//!
//! Each inner transaction is zero-padded to the next 8-byte boundary, and
//! `payloadSize` counts that padding. Cosignatures follow the payload
//! back-to-back, unpadded, until the buffer ends.

use crate::transaction::{AggregateBody, Cosignature};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

const COSIGNATURE_SIZE: usize = 32 + 64;
const PREFIX_SIZE: usize = 32 + 4 + 4;

/// Rounds an inner transaction size up to the next 8-byte boundary.
fn aligned(size: usize) -> usize {
    (size + 7) & !7
}

pub fn size(body: &AggregateBody) -> usize {
    PREFIX_SIZE + payload_size(body) + COSIGNATURE_SIZE * body.cosignatures.len()
}

fn payload_size(body: &AggregateBody) -> usize {
    body.transactions
        .iter()
        .map(|tx| aligned(super::embedded_size_of(tx)))
        .sum()
}

pub fn encode(w: &mut ByteWriter, body: &AggregateBody) -> Result<(), CodecError> {
    let payload = payload_size(body);
    let payload_u32 = u32::try_from(payload).map_err(|_| CodecError::FieldTooLong {
        field: "aggregate payload",
        actual: payload,
        max: u32::MAX as usize,
    })?;
    w.write_hash(&body.transactions_hash);
    w.write_u32(payload_u32);
    w.write_u32(0);
    for tx in &body.transactions {
        let start = w.len();
        super::write_embedded(w, tx)?;
        let written = w.len() - start;
        w.write_zeros(aligned(written) - written);
    }
    for cosignature in &body.cosignatures {
        w.write_public_key(&cosignature.signer);
        w.write_signature(&cosignature.signature);
    }
    Ok(())
}

pub fn decode(r: &mut ByteReader<'_>) -> Result<AggregateBody, CodecError> {
    let transactions_hash = r.read_hash()?;
    let payload = r.read_u32()? as usize;
    r.read_u32()?;

    let mut payload_reader = r.sub_reader(payload)?;
    let mut transactions = Vec::new();
    while !payload_reader.is_empty() {
        let start = payload_reader.position();
        transactions.push(super::read_embedded(&mut payload_reader)?);
        let consumed = payload_reader.position() - start;
        let padding = aligned(consumed) - consumed;
        // the final transaction's padding is still part of payloadSize
        payload_reader.read_bytes(padding.min(payload_reader.remaining()))?;
    }

    let mut cosignatures = Vec::new();
    while !r.is_empty() {
        if r.remaining() < COSIGNATURE_SIZE {
            return Err(CodecError::TrailingBytes(r.remaining()));
        }
        let signer = r.read_public_key()?;
        let signature = r.read_signature()?;
        cosignatures.push(Cosignature { signer, signature });
    }

    Ok(AggregateBody {
        transactions_hash,
        transactions,
        cosignatures,
    })
}
