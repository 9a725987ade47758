//! Lock bodies: hash lock, secret lock, secret proof.

use crate::transaction::{HashLockBody, LockHashAlgorithm, SecretLockBody, SecretProofBody};
use crate::model::NetworkType;

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

fn read_hash_algorithm(r: &mut ByteReader<'_>) -> Result<LockHashAlgorithm, CodecError> {
    let raw = r.read_u8()?;
    LockHashAlgorithm::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "lock hash algorithm",
        value: raw,
    })
}

// ---------------------------------------------------------------------------
// HashLock
// ---------------------------------------------------------------------------

pub const HASH_LOCK_SIZE: usize = 16 + 8 + 32;

pub fn encode_hash_lock(w: &mut ByteWriter, body: &HashLockBody) {
    w.write_mosaic(&body.mosaic);
    w.write_u64(body.duration);
    w.write_hash(&body.hash);
}

pub fn decode_hash_lock(r: &mut ByteReader<'_>) -> Result<HashLockBody, CodecError> {
    let mosaic = r.read_mosaic()?;
    let duration = r.read_u64()?;
    let hash = r.read_hash()?;
    Ok(HashLockBody {
        mosaic,
        duration,
        hash,
    })
}

// ---------------------------------------------------------------------------
// SecretLock
// ---------------------------------------------------------------------------

pub const SECRET_LOCK_SIZE: usize = 16 + 8 + 1 + 32 + 25;

pub fn encode_secret_lock(w: &mut ByteWriter, body: &SecretLockBody, network: NetworkType) {
    w.write_mosaic(&body.mosaic);
    w.write_u64(body.duration);
    w.write_u8(body.hash_algorithm as u8);
    w.write_hash(&body.secret);
    w.write_unresolved_address(&body.recipient, network);
}

pub fn decode_secret_lock(r: &mut ByteReader<'_>) -> Result<SecretLockBody, CodecError> {
    let mosaic = r.read_mosaic()?;
    let duration = r.read_u64()?;
    let hash_algorithm = read_hash_algorithm(r)?;
    let secret = r.read_hash()?;
    let recipient = r.read_unresolved_address()?;
    Ok(SecretLockBody {
        mosaic,
        duration,
        hash_algorithm,
        secret,
        recipient,
    })
}

// ---------------------------------------------------------------------------
// SecretProof
// ---------------------------------------------------------------------------

pub fn secret_proof_size(body: &SecretProofBody) -> usize {
    1 + 32 + 25 + 2 + body.proof.len()
}

pub fn encode_secret_proof(
    w: &mut ByteWriter,
    body: &SecretProofBody,
    network: NetworkType,
) -> Result<(), CodecError> {
    let proof_size = u16::try_from(body.proof.len()).map_err(|_| CodecError::FieldTooLong {
        field: "secret proof",
        actual: body.proof.len(),
        max: u16::MAX as usize,
    })?;
    w.write_u8(body.hash_algorithm as u8);
    w.write_hash(&body.secret);
    w.write_unresolved_address(&body.recipient, network);
    w.write_u16(proof_size);
    w.write_bytes(&body.proof);
    Ok(())
}

pub fn decode_secret_proof(r: &mut ByteReader<'_>) -> Result<SecretProofBody, CodecError> {
    let hash_algorithm = read_hash_algorithm(r)?;
    let secret = r.read_hash()?;
    let recipient = r.read_unresolved_address()?;
    let proof_size = r.read_u16()? as usize;
    let proof = r.read_bytes(proof_size)?.to_vec();
    Ok(SecretProofBody {
        hash_algorithm,
        secret,
        recipient,
        proof,
    })
}
