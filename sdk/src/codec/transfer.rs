//! Transfer body layout.
//!
//! `recipient[25] | mosaicsCount[1] | messageSize[2] | reserved[4] |
//! mosaics[16 each] | message[type byte + payload]`
//!
//! Mosaics are written sorted ascending by raw id; the message size counts
//! the type byte, so zero means "no message" rather than "empty message".

use crate::model::{Address, Message, MessageType, NetworkType};
use crate::transaction::TransferBody;

use super::primitive::{ByteReader, ByteWriter};
use super::CodecError;

const MOSAIC_WIDTH: usize = 16;

pub fn size(body: &TransferBody) -> usize {
    Address::LENGTH
        + 1
        + 2
        + 4
        + MOSAIC_WIDTH * body.mosaics.len()
        + body.message.as_ref().map_or(0, Message::wire_len)
}

pub fn encode(
    w: &mut ByteWriter,
    body: &TransferBody,
    network: NetworkType,
) -> Result<(), CodecError> {
    let count = u8::try_from(body.mosaics.len()).map_err(|_| CodecError::FieldTooLong {
        field: "mosaics",
        actual: body.mosaics.len(),
        max: u8::MAX as usize,
    })?;
    let message_len = body.message.as_ref().map_or(0, Message::wire_len);
    let message_size = u16::try_from(message_len).map_err(|_| CodecError::FieldTooLong {
        field: "message",
        actual: message_len,
        max: u16::MAX as usize,
    })?;

    w.write_unresolved_address(&body.recipient, network);
    w.write_u8(count);
    w.write_u16(message_size);
    w.write_u32(0);

    let mut mosaics = body.mosaics.clone();
    mosaics.sort_by_key(|m| m.id);
    for mosaic in &mosaics {
        w.write_mosaic(mosaic);
    }

    if let Some(message) = &body.message {
        w.write_u8(message.kind as u8);
        w.write_bytes(&message.payload);
    }
    Ok(())
}

pub fn decode(r: &mut ByteReader<'_>) -> Result<TransferBody, CodecError> {
    let recipient = r.read_unresolved_address()?;
    let count = r.read_u8()?;
    let message_size = r.read_u16()? as usize;
    r.read_u32()?;

    let mut mosaics = Vec::with_capacity(count as usize);
    for _ in 0..count {
        mosaics.push(r.read_mosaic()?);
    }

    let message = if message_size == 0 {
        None
    } else {
        let raw = r.read_u8()?;
        let kind = MessageType::from_raw(raw).ok_or(CodecError::InvalidEnumValue {
            field: "message type",
            value: raw,
        })?;
        let payload = r.read_bytes(message_size - 1)?.to_vec();
        Some(Message { kind, payload })
    };

    Ok(TransferBody {
        recipient,
        mosaics,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mosaic, UnresolvedAddress, UnresolvedMosaicId};

    fn sample() -> TransferBody {
        TransferBody {
            recipient: UnresolvedAddress::Address(Address::from_bytes([0x90; 25])),
            mosaics: vec![
                Mosaic::new(UnresolvedMosaicId(9), 1),
                Mosaic::new(UnresolvedMosaicId(2), 5),
            ],
            message: Some(Message::plain("Some Message")),
        }
    }

    #[test]
    fn mosaics_are_sorted_on_encode() {
        let mut w = ByteWriter::new();
        encode(&mut w, &sample(), NetworkType::PrivateTest).unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), size(&sample()));

        let mut r = ByteReader::new(&bytes);
        let decoded = decode(&mut r).unwrap();
        assert!(r.is_empty());
        assert_eq!(decoded.mosaics[0].id, UnresolvedMosaicId(2));
        assert_eq!(decoded.mosaics[1].id, UnresolvedMosaicId(9));
    }

    #[test]
    fn no_message_encodes_size_zero() {
        let body = TransferBody {
            message: None,
            ..sample()
        };
        let mut w = ByteWriter::new();
        encode(&mut w, &body, NetworkType::PrivateTest).unwrap();
        let bytes = w.into_inner();
        // messageSize sits right after the mosaic count
        assert_eq!(&bytes[26..28], &[0, 0]);

        let decoded = decode(&mut ByteReader::new(&bytes)).unwrap();
        assert!(decoded.message.is_none());
    }

    #[test]
    fn bad_message_type_is_rejected() {
        let mut w = ByteWriter::new();
        encode(&mut w, &sample(), NetworkType::PrivateTest).unwrap();
        let mut bytes = w.into_inner();
        // corrupt the message type byte (after header fields and 2 mosaics)
        bytes[25 + 1 + 2 + 4 + 32] = 0x7f;
        assert!(matches!(
            decode(&mut ByteReader::new(&bytes)),
            Err(CodecError::InvalidEnumValue {
                field: "message type",
                value: 0x7f
            })
        ));
    }
}
