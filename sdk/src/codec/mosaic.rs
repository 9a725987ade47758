//! Mosaic lifecycle bodies: definition, supply change, alias.

use crate::model::{AliasAction, MosaicFlags, MosaicId, MosaicNonce, NamespaceId, UnresolvedMosaicId};
use crate::transaction::{
    MosaicAliasBody, MosaicDefinitionBody, MosaicSupplyChangeAction, MosaicSupplyChangeBody,
};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

// ---------------------------------------------------------------------------
// MosaicDefinition
// ---------------------------------------------------------------------------

pub const DEFINITION_SIZE: usize = 4 + 8 + 1 + 1 + 8;

pub fn encode_definition(w: &mut ByteWriter, body: &MosaicDefinitionBody) {
    w.write_u32(body.nonce.0);
    w.write_u64(body.id.0);
    w.write_u8(body.flags.bits());
    w.write_u8(body.divisibility);
    w.write_u64(body.duration);
}

pub fn decode_definition(r: &mut ByteReader<'_>) -> Result<MosaicDefinitionBody, CodecError> {
    let nonce = MosaicNonce(r.read_u32()?);
    let id = MosaicId(r.read_u64()?);
    let flags = MosaicFlags::from_raw(r.read_u8()?);
    let divisibility = r.read_u8()?;
    let duration = r.read_u64()?;
    Ok(MosaicDefinitionBody {
        nonce,
        id,
        flags,
        divisibility,
        duration,
    })
}

// ---------------------------------------------------------------------------
// MosaicSupplyChange
// ---------------------------------------------------------------------------

pub const SUPPLY_CHANGE_SIZE: usize = 8 + 8 + 1;

pub fn encode_supply_change(w: &mut ByteWriter, body: &MosaicSupplyChangeBody) {
    w.write_u64(body.mosaic_id.0);
    w.write_u64(body.delta);
    w.write_u8(body.action as u8);
}

pub fn decode_supply_change(r: &mut ByteReader<'_>) -> Result<MosaicSupplyChangeBody, CodecError> {
    let mosaic_id = UnresolvedMosaicId(r.read_u64()?);
    let delta = r.read_u64()?;
    let raw = r.read_u8()?;
    let action =
        MosaicSupplyChangeAction::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
            field: "supply change action",
            value: raw,
        })?;
    Ok(MosaicSupplyChangeBody {
        mosaic_id,
        delta,
        action,
    })
}

// ---------------------------------------------------------------------------
// MosaicAlias
// ---------------------------------------------------------------------------

pub const ALIAS_SIZE: usize = 1 + 8 + 8;

pub fn encode_alias(w: &mut ByteWriter, body: &MosaicAliasBody) {
    w.write_u8(body.action as u8);
    w.write_u64(body.namespace_id.0);
    w.write_u64(body.mosaic_id.0);
}

pub fn decode_alias(r: &mut ByteReader<'_>) -> Result<MosaicAliasBody, CodecError> {
    let raw = r.read_u8()?;
    let action = AliasAction::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "alias action",
        value: raw,
    })?;
    let namespace_id = NamespaceId(r.read_u64()?);
    let mosaic_id = MosaicId(r.read_u64()?);
    Ok(MosaicAliasBody {
        action,
        namespace_id,
        mosaic_id,
    })
}
