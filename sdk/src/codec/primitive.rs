//! Little-endian byte-level reader and writer.
//!
//! Every multi-byte integer on the wire is little-endian. The reader is a
//! cursor over a borrowed slice and never copies more than it hands out;
//! the writer is a thin wrapper over a `Vec<u8>` that grows as fields are
//! appended.

use crate::model::{
    Address, Hash256, Mosaic, NamespaceId, NetworkType, PublicKey, Signature, UnresolvedAddress,
    UnresolvedMosaicId,
};

use super::CodecError;

/// Low bit of the leading byte of a 25-byte recipient slot. Set means the
/// slot holds a namespace alias instead of a resolved address.
const ALIAS_FLAG: u8 = 0x01;

// ---------------------------------------------------------------------------
// ByteReader
// ---------------------------------------------------------------------------

/// A cursor over an immutable byte slice.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Absolute cursor position from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consumes exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Consumes a fixed-width array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Splits off a sub-reader over the next `n` bytes and advances past
    /// them. Used for length-delimited regions like the aggregate payload.
    pub fn sub_reader(&mut self, n: usize) -> Result<ByteReader<'a>, CodecError> {
        Ok(ByteReader::new(self.read_bytes(n)?))
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    // --- typed wire fields -------------------------------------------------

    pub fn read_public_key(&mut self) -> Result<PublicKey, CodecError> {
        Ok(PublicKey::from_bytes(self.read_array()?))
    }

    pub fn read_signature(&mut self) -> Result<Signature, CodecError> {
        Ok(Signature::from_bytes(self.read_array()?))
    }

    pub fn read_hash(&mut self) -> Result<Hash256, CodecError> {
        Ok(Hash256::from_bytes(self.read_array()?))
    }

    pub fn read_address(&mut self) -> Result<Address, CodecError> {
        Ok(Address::from_bytes(self.read_array()?))
    }

    /// Reads a 25-byte recipient slot: a resolved address, or a namespace
    /// alias flagged by the low bit of the leading byte.
    pub fn read_unresolved_address(&mut self) -> Result<UnresolvedAddress, CodecError> {
        let raw: [u8; Address::LENGTH] = self.read_array()?;
        if raw[0] & ALIAS_FLAG != 0 {
            let mut id = [0u8; 8];
            id.copy_from_slice(&raw[1..9]);
            Ok(UnresolvedAddress::Alias(NamespaceId(u64::from_le_bytes(id))))
        } else {
            Ok(UnresolvedAddress::Address(Address::from_bytes(raw)))
        }
    }

    pub fn read_mosaic(&mut self) -> Result<Mosaic, CodecError> {
        let id = UnresolvedMosaicId(self.read_u64()?);
        let amount = self.read_u64()?;
        Ok(Mosaic { id, amount })
    }
}

// ---------------------------------------------------------------------------
// ByteWriter
// ---------------------------------------------------------------------------

/// An append-only byte buffer.
#[derive(Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends `n` zero bytes.
    pub fn write_zeros(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.write_bytes(&value.to_le_bytes());
    }

    // --- typed wire fields -------------------------------------------------

    pub fn write_public_key(&mut self, key: &PublicKey) {
        self.write_bytes(key.as_bytes());
    }

    /// Writes the signer slot: the key, or 32 zero bytes when unsigned.
    pub fn write_optional_public_key(&mut self, key: Option<&PublicKey>) {
        match key {
            Some(key) => self.write_public_key(key),
            None => self.write_zeros(PublicKey::LENGTH),
        }
    }

    pub fn write_signature(&mut self, signature: &Signature) {
        self.write_bytes(signature.as_bytes());
    }

    /// Writes the signature slot: the signature, or 64 zero bytes.
    pub fn write_optional_signature(&mut self, signature: Option<&Signature>) {
        match signature {
            Some(signature) => self.write_signature(signature),
            None => self.write_zeros(Signature::LENGTH),
        }
    }

    pub fn write_hash(&mut self, hash: &Hash256) {
        self.write_bytes(hash.as_bytes());
    }

    pub fn write_address(&mut self, address: &Address) {
        self.write_bytes(address.as_bytes());
    }

    /// Writes a 25-byte recipient slot. An alias encodes as the network
    /// byte with the alias flag set, the 8-byte namespace id, and 16 bytes
    /// of zero padding to fill the slot.
    pub fn write_unresolved_address(&mut self, address: &UnresolvedAddress, network: NetworkType) {
        match address {
            UnresolvedAddress::Address(address) => self.write_address(address),
            UnresolvedAddress::Alias(id) => {
                self.write_u8(network as u8 | ALIAS_FLAG);
                self.write_u64(id.0);
                self.write_zeros(16);
            }
        }
    }

    pub fn write_mosaic(&mut self, mosaic: &Mosaic) {
        self.write_u64(mosaic.id.0);
        self.write_u64(mosaic.amount);
    }
}
