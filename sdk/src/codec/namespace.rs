//! Namespace bodies: registration and address alias.

use crate::model::{AliasAction, NamespaceId, NamespaceRegistration};
use crate::transaction::{AddressAliasBody, NamespaceRegistrationBody};

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

// ---------------------------------------------------------------------------
// NamespaceRegistration
// ---------------------------------------------------------------------------

// type | duration-or-parent | id | nameSize | name
pub fn registration_size(body: &NamespaceRegistrationBody) -> usize {
    1 + 8 + 8 + 1 + body.name.len()
}

pub fn encode_registration(
    w: &mut ByteWriter,
    body: &NamespaceRegistrationBody,
) -> Result<(), CodecError> {
    let name_size = u8::try_from(body.name.len()).map_err(|_| CodecError::FieldTooLong {
        field: "namespace name",
        actual: body.name.len(),
        max: u8::MAX as usize,
    })?;
    w.write_u8(body.registration.type_byte());
    match body.registration {
        NamespaceRegistration::Root { duration } => w.write_u64(duration),
        NamespaceRegistration::Child { parent_id } => w.write_u64(parent_id.0),
    }
    w.write_u64(body.id.0);
    w.write_u8(name_size);
    w.write_bytes(body.name.as_bytes());
    Ok(())
}

pub fn decode_registration(
    r: &mut ByteReader<'_>,
) -> Result<NamespaceRegistrationBody, CodecError> {
    let type_byte = r.read_u8()?;
    let duration_or_parent = r.read_u64()?;
    let registration = match type_byte {
        0 => NamespaceRegistration::Root {
            duration: duration_or_parent,
        },
        1 => NamespaceRegistration::Child {
            parent_id: NamespaceId(duration_or_parent),
        },
        other => {
            return Err(CodecError::InvalidEnumValue {
                field: "namespace registration type",
                value: other,
            })
        }
    };
    let id = NamespaceId(r.read_u64()?);
    let name_size = r.read_u8()? as usize;
    let name = String::from_utf8(r.read_bytes(name_size)?.to_vec())
        .map_err(|_| CodecError::InvalidName)?;
    Ok(NamespaceRegistrationBody {
        registration,
        id,
        name,
    })
}

// ---------------------------------------------------------------------------
// AddressAlias
// ---------------------------------------------------------------------------

pub const ADDRESS_ALIAS_SIZE: usize = 1 + 8 + 25;

pub fn encode_address_alias(w: &mut ByteWriter, body: &AddressAliasBody) {
    w.write_u8(body.action as u8);
    w.write_u64(body.namespace_id.0);
    w.write_address(&body.address);
}

pub fn decode_address_alias(r: &mut ByteReader<'_>) -> Result<AddressAliasBody, CodecError> {
    let raw = r.read_u8()?;
    let action = AliasAction::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
        field: "alias action",
        value: raw,
    })?;
    let namespace_id = NamespaceId(r.read_u64()?);
    let address = r.read_address()?;
    Ok(AddressAliasBody {
        action,
        namespace_id,
        address,
    })
}
