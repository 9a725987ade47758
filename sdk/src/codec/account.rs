//! Account bodies: remote link and multisig modification.

use crate::transaction::{AccountLinkBody, LinkAction, MultisigAccountModificationBody};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

// ---------------------------------------------------------------------------
// AccountLink
// ---------------------------------------------------------------------------

pub const LINK_SIZE: usize = 32 + 1;

pub fn encode_link(w: &mut ByteWriter, body: &AccountLinkBody) {
    w.write_public_key(&body.remote_public_key);
    w.write_u8(body.action as u8);
}

pub fn decode_link(r: &mut ByteReader<'_>) -> Result<AccountLinkBody, CodecError> {
    let remote_public_key = r.read_public_key()?;
    let raw = r.read_u8()?;
    let action = LinkAction::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "link action",
        value: raw,
    })?;
    Ok(AccountLinkBody {
        remote_public_key,
        action,
    })
}

// ---------------------------------------------------------------------------
// MultisigAccountModification
// ---------------------------------------------------------------------------

pub fn multisig_size(body: &MultisigAccountModificationBody) -> usize {
    1 + 1 + 1 + 32 * body.additions.len() + 1 + 32 * body.deletions.len()
}

pub fn encode_multisig(
    w: &mut ByteWriter,
    body: &MultisigAccountModificationBody,
) -> Result<(), CodecError> {
    let additions = u8::try_from(body.additions.len()).map_err(|_| CodecError::FieldTooLong {
        field: "cosignatory additions",
        actual: body.additions.len(),
        max: u8::MAX as usize,
    })?;
    let deletions = u8::try_from(body.deletions.len()).map_err(|_| CodecError::FieldTooLong {
        field: "cosignatory deletions",
        actual: body.deletions.len(),
        max: u8::MAX as usize,
    })?;
    w.write_i8(body.min_removal_delta);
    w.write_i8(body.min_approval_delta);
    w.write_u8(additions);
    for key in &body.additions {
        w.write_public_key(key);
    }
    w.write_u8(deletions);
    for key in &body.deletions {
        w.write_public_key(key);
    }
    Ok(())
}

pub fn decode_multisig(
    r: &mut ByteReader<'_>,
) -> Result<MultisigAccountModificationBody, CodecError> {
    let min_removal_delta = r.read_i8()?;
    let min_approval_delta = r.read_i8()?;
    let additions_count = r.read_u8()?;
    let mut additions = Vec::with_capacity(additions_count as usize);
    for _ in 0..additions_count {
        additions.push(r.read_public_key()?);
    }
    let deletions_count = r.read_u8()?;
    let mut deletions = Vec::with_capacity(deletions_count as usize);
    for _ in 0..deletions_count {
        deletions.push(r.read_public_key()?);
    }
    Ok(MultisigAccountModificationBody {
        min_removal_delta,
        min_approval_delta,
        additions,
        deletions,
    })
}
