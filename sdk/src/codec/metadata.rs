//! Metadata bodies, attached to an account, a mosaic, or a namespace.
//!
//! The three share a prefix (target key, scoped key) and a suffix (signed
//! size delta, value); mosaic and namespace metadata add an 8-byte target
//! id in between.

use crate::model::{NamespaceId, UnresolvedMosaicId};
use crate::transaction::{AccountMetadataBody, MosaicMetadataBody, NamespaceMetadataBody};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

fn check_value_size(len: usize) -> Result<u16, CodecError> {
    u16::try_from(len).map_err(|_| CodecError::FieldTooLong {
        field: "metadata value",
        actual: len,
        max: u16::MAX as usize,
    })
}

// ---------------------------------------------------------------------------
// AccountMetadata
// ---------------------------------------------------------------------------

pub fn account_size(body: &AccountMetadataBody) -> usize {
    32 + 8 + 2 + 2 + body.value.len()
}

pub fn encode_account(w: &mut ByteWriter, body: &AccountMetadataBody) -> Result<(), CodecError> {
    let value_size = check_value_size(body.value.len())?;
    w.write_public_key(&body.target_public_key);
    w.write_u64(body.scoped_metadata_key);
    w.write_i16(body.value_size_delta);
    w.write_u16(value_size);
    w.write_bytes(&body.value);
    Ok(())
}

pub fn decode_account(r: &mut ByteReader<'_>) -> Result<AccountMetadataBody, CodecError> {
    let target_public_key = r.read_public_key()?;
    let scoped_metadata_key = r.read_u64()?;
    let value_size_delta = r.read_i16()?;
    let value_size = r.read_u16()? as usize;
    let value = r.read_bytes(value_size)?.to_vec();
    Ok(AccountMetadataBody {
        target_public_key,
        scoped_metadata_key,
        value_size_delta,
        value,
    })
}

// ---------------------------------------------------------------------------
// MosaicMetadata
// ---------------------------------------------------------------------------

pub fn mosaic_size(body: &MosaicMetadataBody) -> usize {
    32 + 8 + 8 + 2 + 2 + body.value.len()
}

pub fn encode_mosaic(w: &mut ByteWriter, body: &MosaicMetadataBody) -> Result<(), CodecError> {
    let value_size = check_value_size(body.value.len())?;
    w.write_public_key(&body.target_public_key);
    w.write_u64(body.scoped_metadata_key);
    w.write_u64(body.target_mosaic_id.0);
    w.write_i16(body.value_size_delta);
    w.write_u16(value_size);
    w.write_bytes(&body.value);
    Ok(())
}

pub fn decode_mosaic(r: &mut ByteReader<'_>) -> Result<MosaicMetadataBody, CodecError> {
    let target_public_key = r.read_public_key()?;
    let scoped_metadata_key = r.read_u64()?;
    let target_mosaic_id = UnresolvedMosaicId(r.read_u64()?);
    let value_size_delta = r.read_i16()?;
    let value_size = r.read_u16()? as usize;
    let value = r.read_bytes(value_size)?.to_vec();
    Ok(MosaicMetadataBody {
        target_public_key,
        scoped_metadata_key,
        target_mosaic_id,
        value_size_delta,
        value,
    })
}

// ---------------------------------------------------------------------------
// NamespaceMetadata
// ---------------------------------------------------------------------------

pub fn namespace_size(body: &NamespaceMetadataBody) -> usize {
    32 + 8 + 8 + 2 + 2 + body.value.len()
}

pub fn encode_namespace(
    w: &mut ByteWriter,
    body: &NamespaceMetadataBody,
) -> Result<(), CodecError> {
    let value_size = check_value_size(body.value.len())?;
    w.write_public_key(&body.target_public_key);
    w.write_u64(body.scoped_metadata_key);
    w.write_u64(body.target_namespace_id.0);
    w.write_i16(body.value_size_delta);
    w.write_u16(value_size);
    w.write_bytes(&body.value);
    Ok(())
}

pub fn decode_namespace(r: &mut ByteReader<'_>) -> Result<NamespaceMetadataBody, CodecError> {
    let target_public_key = r.read_public_key()?;
    let scoped_metadata_key = r.read_u64()?;
    let target_namespace_id = NamespaceId(r.read_u64()?);
    let value_size_delta = r.read_i16()?;
    let value_size = r.read_u16()? as usize;
    let value = r.read_bytes(value_size)?.to_vec();
    Ok(NamespaceMetadataBody {
        target_public_key,
        scoped_metadata_key,
        target_namespace_id,
        value_size_delta,
        value,
    })
}
