//! Restriction bodies: the three account restriction flavours plus the two
//! mosaic restriction kinds.
//!
//! The account restriction bodies share a shape (restriction type, entry
//! count, then `(action, value)` pairs) and differ only in the width of
//! the value: 25 bytes for addresses, 8 for mosaic ids, 2 for transaction
//! type codes.

use crate::model::{NetworkType, UnresolvedMosaicId};
use crate::transaction::{
    AccountAddressRestrictionBody, AccountMosaicRestrictionBody, AccountOperationRestrictionBody,
    AccountRestrictionType, MosaicAddressRestrictionBody, MosaicGlobalRestrictionBody,
    MosaicRestrictionType, RestrictionModification, RestrictionModificationAction, TransactionType,
};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

fn check_count(count: usize, field: &'static str) -> Result<u8, CodecError> {
    u8::try_from(count).map_err(|_| CodecError::FieldTooLong {
        field,
        actual: count,
        max: u8::MAX as usize,
    })
}

fn read_restriction_type(r: &mut ByteReader<'_>) -> Result<AccountRestrictionType, CodecError> {
    let raw = r.read_u8()?;
    AccountRestrictionType::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "account restriction type",
        value: raw,
    })
}

fn read_modification_action(
    r: &mut ByteReader<'_>,
) -> Result<RestrictionModificationAction, CodecError> {
    let raw = r.read_u8()?;
    RestrictionModificationAction::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "restriction modification action",
        value: raw,
    })
}

// ---------------------------------------------------------------------------
// Account restrictions
// ---------------------------------------------------------------------------

pub fn address_restriction_size(body: &AccountAddressRestrictionBody) -> usize {
    1 + 1 + (1 + 25) * body.modifications.len()
}

pub fn encode_address_restriction(
    w: &mut ByteWriter,
    body: &AccountAddressRestrictionBody,
    network: NetworkType,
) -> Result<(), CodecError> {
    let count = check_count(body.modifications.len(), "restriction modifications")?;
    w.write_u8(body.restriction_type as u8);
    w.write_u8(count);
    for entry in &body.modifications {
        w.write_u8(entry.action as u8);
        w.write_unresolved_address(&entry.value, network);
    }
    Ok(())
}

pub fn decode_address_restriction(
    r: &mut ByteReader<'_>,
) -> Result<AccountAddressRestrictionBody, CodecError> {
    let restriction_type = read_restriction_type(r)?;
    let count = r.read_u8()?;
    let mut modifications = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let action = read_modification_action(r)?;
        let value = r.read_unresolved_address()?;
        modifications.push(RestrictionModification { action, value });
    }
    Ok(AccountAddressRestrictionBody {
        restriction_type,
        modifications,
    })
}

pub fn mosaic_restriction_size(body: &AccountMosaicRestrictionBody) -> usize {
    1 + 1 + (1 + 8) * body.modifications.len()
}

pub fn encode_mosaic_restriction(
    w: &mut ByteWriter,
    body: &AccountMosaicRestrictionBody,
) -> Result<(), CodecError> {
    let count = check_count(body.modifications.len(), "restriction modifications")?;
    w.write_u8(body.restriction_type as u8);
    w.write_u8(count);
    for entry in &body.modifications {
        w.write_u8(entry.action as u8);
        w.write_u64(entry.value.0);
    }
    Ok(())
}

pub fn decode_mosaic_restriction(
    r: &mut ByteReader<'_>,
) -> Result<AccountMosaicRestrictionBody, CodecError> {
    let restriction_type = read_restriction_type(r)?;
    let count = r.read_u8()?;
    let mut modifications = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let action = read_modification_action(r)?;
        let value = UnresolvedMosaicId(r.read_u64()?);
        modifications.push(RestrictionModification { action, value });
    }
    Ok(AccountMosaicRestrictionBody {
        restriction_type,
        modifications,
    })
}

pub fn operation_restriction_size(body: &AccountOperationRestrictionBody) -> usize {
    1 + 1 + (1 + 2) * body.modifications.len()
}

pub fn encode_operation_restriction(
    w: &mut ByteWriter,
    body: &AccountOperationRestrictionBody,
) -> Result<(), CodecError> {
    let count = check_count(body.modifications.len(), "restriction modifications")?;
    w.write_u8(body.restriction_type as u8);
    w.write_u8(count);
    for entry in &body.modifications {
        w.write_u8(entry.action as u8);
        w.write_u16(entry.value.code());
    }
    Ok(())
}

pub fn decode_operation_restriction(
    r: &mut ByteReader<'_>,
) -> Result<AccountOperationRestrictionBody, CodecError> {
    let restriction_type = read_restriction_type(r)?;
    let count = r.read_u8()?;
    let mut modifications = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let action = read_modification_action(r)?;
        let code = r.read_u16()?;
        let value = TransactionType::from_code(code)
            .ok_or(CodecError::UnsupportedTransactionType(code))?;
        modifications.push(RestrictionModification { action, value });
    }
    Ok(AccountOperationRestrictionBody {
        restriction_type,
        modifications,
    })
}

// ---------------------------------------------------------------------------
// Mosaic restrictions
// ---------------------------------------------------------------------------

pub const MOSAIC_ADDRESS_RESTRICTION_SIZE: usize = 8 + 8 + 25 + 8 + 8;

pub fn encode_mosaic_address_restriction(
    w: &mut ByteWriter,
    body: &MosaicAddressRestrictionBody,
    network: NetworkType,
) {
    w.write_u64(body.mosaic_id.0);
    w.write_u64(body.restriction_key);
    w.write_unresolved_address(&body.target_address, network);
    w.write_u64(body.previous_value);
    w.write_u64(body.new_value);
}

pub fn decode_mosaic_address_restriction(
    r: &mut ByteReader<'_>,
) -> Result<MosaicAddressRestrictionBody, CodecError> {
    let mosaic_id = UnresolvedMosaicId(r.read_u64()?);
    let restriction_key = r.read_u64()?;
    let target_address = r.read_unresolved_address()?;
    let previous_value = r.read_u64()?;
    let new_value = r.read_u64()?;
    Ok(MosaicAddressRestrictionBody {
        mosaic_id,
        restriction_key,
        target_address,
        previous_value,
        new_value,
    })
}

pub const MOSAIC_GLOBAL_RESTRICTION_SIZE: usize = 8 + 8 + 8 + 8 + 1 + 8 + 1;

pub fn encode_mosaic_global_restriction(w: &mut ByteWriter, body: &MosaicGlobalRestrictionBody) {
    w.write_u64(body.mosaic_id.0);
    w.write_u64(body.reference_mosaic_id.0);
    w.write_u64(body.restriction_key);
    w.write_u64(body.previous_value);
    w.write_u8(body.previous_type as u8);
    w.write_u64(body.new_value);
    w.write_u8(body.new_type as u8);
}

pub fn decode_mosaic_global_restriction(
    r: &mut ByteReader<'_>,
) -> Result<MosaicGlobalRestrictionBody, CodecError> {
    let mosaic_id = UnresolvedMosaicId(r.read_u64()?);
    let reference_mosaic_id = UnresolvedMosaicId(r.read_u64()?);
    let restriction_key = r.read_u64()?;
    let previous_value = r.read_u64()?;
    let previous_type = read_mosaic_restriction_type(r)?;
    let new_value = r.read_u64()?;
    let new_type = read_mosaic_restriction_type(r)?;
    Ok(MosaicGlobalRestrictionBody {
        mosaic_id,
        reference_mosaic_id,
        restriction_key,
        previous_value,
        previous_type,
        new_value,
        new_type,
    })
}

fn read_mosaic_restriction_type(
    r: &mut ByteReader<'_>,
) -> Result<MosaicRestrictionType, CodecError> {
    let raw = r.read_u8()?;
    MosaicRestrictionType::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "mosaic restriction type",
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, UnresolvedAddress};

    #[test]
    fn address_restriction_roundtrip() {
        let body = AccountAddressRestrictionBody {
            restriction_type: AccountRestrictionType::BlockAddress,
            modifications: vec![RestrictionModification {
                action: RestrictionModificationAction::Add,
                value: UnresolvedAddress::Address(Address::from_bytes([0x90; 25])),
            }],
        };
        let mut w = ByteWriter::new();
        encode_address_restriction(&mut w, &body, NetworkType::PrivateTest).unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), address_restriction_size(&body));
        assert_eq!(
            decode_address_restriction(&mut ByteReader::new(&bytes)).unwrap(),
            body
        );
    }

    #[test]
    fn mosaic_restriction_roundtrip() {
        let body = AccountMosaicRestrictionBody {
            restriction_type: AccountRestrictionType::BlockMosaic,
            modifications: vec![
                RestrictionModification {
                    action: RestrictionModificationAction::Add,
                    value: UnresolvedMosaicId(95442763262823),
                },
                RestrictionModification {
                    action: RestrictionModificationAction::Remove,
                    value: UnresolvedMosaicId(7),
                },
            ],
        };
        let mut w = ByteWriter::new();
        encode_mosaic_restriction(&mut w, &body).unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), mosaic_restriction_size(&body));
        assert_eq!(
            decode_mosaic_restriction(&mut ByteReader::new(&bytes)).unwrap(),
            body
        );
    }

    #[test]
    fn operation_restriction_roundtrip() {
        let body = AccountOperationRestrictionBody {
            restriction_type: AccountRestrictionType::AllowTransactionType,
            modifications: vec![
                RestrictionModification {
                    action: RestrictionModificationAction::Add,
                    value: TransactionType::Transfer,
                },
                RestrictionModification {
                    action: RestrictionModificationAction::Remove,
                    value: TransactionType::SecretProof,
                },
            ],
        };
        let mut w = ByteWriter::new();
        encode_operation_restriction(&mut w, &body).unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), operation_restriction_size(&body));
        assert_eq!(
            decode_operation_restriction(&mut ByteReader::new(&bytes)).unwrap(),
            body
        );
    }

    #[test]
    fn mosaic_address_restriction_roundtrip() {
        let body = MosaicAddressRestrictionBody {
            mosaic_id: UnresolvedMosaicId(95442763262823),
            restriction_key: 0x0123456789abcdef,
            target_address: UnresolvedAddress::Address(Address::from_bytes([0x90; 25])),
            previous_value: u64::MAX,
            new_value: 2,
        };
        let mut w = ByteWriter::new();
        encode_mosaic_address_restriction(&mut w, &body, NetworkType::PrivateTest);
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), MOSAIC_ADDRESS_RESTRICTION_SIZE);
        assert_eq!(
            decode_mosaic_address_restriction(&mut ByteReader::new(&bytes)).unwrap(),
            body
        );
    }

    #[test]
    fn global_restriction_roundtrip() {
        let body = MosaicGlobalRestrictionBody {
            mosaic_id: UnresolvedMosaicId(1),
            reference_mosaic_id: UnresolvedMosaicId(0),
            restriction_key: 0x1122,
            previous_value: 0,
            previous_type: MosaicRestrictionType::None,
            new_value: 5,
            new_type: MosaicRestrictionType::Ge,
        };
        let mut w = ByteWriter::new();
        encode_mosaic_global_restriction(&mut w, &body);
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), MOSAIC_GLOBAL_RESTRICTION_SIZE);
        assert_eq!(
            decode_mosaic_global_restriction(&mut ByteReader::new(&bytes)).unwrap(),
            body
        );
    }
}
