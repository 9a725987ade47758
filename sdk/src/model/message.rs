//! Transfer message payloads.

use serde::{Deserialize, Serialize};

/// How a transfer message payload is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MessageType {
    /// Cleartext payload.
    Plain = 0x00,
    /// Payload encrypted between sender and recipient. This crate does not
    /// decrypt; it only preserves the bytes.
    Encrypted = 0x01,
}

impl MessageType {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Plain),
            0x01 => Some(Self::Encrypted),
            _ => None,
        }
    }
}

/// A transfer message: one type byte followed by the payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageType,
    pub payload: Vec<u8>,
}

impl Message {
    /// A cleartext message from a UTF-8 string.
    pub fn plain(text: &str) -> Self {
        Self {
            kind: MessageType::Plain,
            payload: text.as_bytes().to_vec(),
        }
    }

    /// An encrypted message from opaque ciphertext bytes.
    pub fn encrypted(ciphertext: Vec<u8>) -> Self {
        Self {
            kind: MessageType::Encrypted,
            payload: ciphertext,
        }
    }

    /// Total wire length: type byte plus payload.
    pub fn wire_len(&self) -> usize {
        1 + self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_wire_len_counts_type_byte() {
        let msg = Message::plain("Some Message");
        assert_eq!(msg.wire_len(), 13);
        assert_eq!(msg.kind, MessageType::Plain);
    }
}
