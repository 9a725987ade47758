//! Account-level primitives: keys, signatures, addresses.
//!
//! All of these are fixed-width byte newtypes. They serialize to JSON as
//! uppercase-insensitive hex strings (the REST layer speaks hex), and they
//! compare and hash by raw bytes, which is what the multisig validator
//! needs for its signer-set arithmetic.
//!
//! The all-zero value of [`PublicKey`] and [`Signature`] is meaningful on
//! the wire: it is the "not signed yet" sentinel, not an error.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use super::namespace::NamespaceId;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors raised while constructing model primitives from external input.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid length for {kind}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown network type byte 0x{0:02x}")]
    UnknownNetworkType(u8),
}

// ---------------------------------------------------------------------------
// Fixed-width byte newtypes
// ---------------------------------------------------------------------------

macro_rules! byte_newtype {
    ($(#[$doc:meta])* $name:ident, $len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wire width in bytes.
            pub const LENGTH: usize = $len;

            /// Wraps raw bytes.
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Parses from a hex string of exactly `2 * LENGTH` characters.
            pub fn from_hex(s: &str) -> Result<Self, ModelError> {
                let decoded = hex::decode(s)?;
                let actual = decoded.len();
                decoded
                    .try_into()
                    .map(Self)
                    .map_err(|_| ModelError::InvalidLength {
                        kind: stringify!($name),
                        expected: $len,
                        actual,
                    })
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// `true` if every byte is zero, the unsigned/unattributed
            /// sentinel on the wire.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self([0u8; $len])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

byte_newtype!(
    /// Ed25519 public key, 32 bytes.
    PublicKey,
    32
);

byte_newtype!(
    /// Ed25519 signature, 64 bytes. Produced by an external signer; this
    /// crate only moves it around.
    Signature,
    64
);

byte_newtype!(
    /// 256-bit hash (transaction hashes, lock secrets, merkle roots).
    Hash256,
    32
);

byte_newtype!(
    /// Raw 25-byte HELIX address: network byte, 20-byte key digest,
    /// 4-byte checksum.
    Address,
    25
);

// ---------------------------------------------------------------------------
// NetworkType
// ---------------------------------------------------------------------------

/// The network a transaction is bound to. One byte on the wire; also the
/// leading byte of every address on that network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NetworkType {
    /// Public production network.
    Mainnet = 0x68,
    /// Public test network.
    Testnet = 0x98,
    /// Private deployment.
    Private = 0x60,
    /// Private test deployment (the network used throughout the test vectors).
    PrivateTest = 0x90,
}

impl NetworkType {
    /// Maps a raw wire byte back to a network, rejecting unknown values.
    pub fn from_raw(value: u8) -> Result<Self, ModelError> {
        match value {
            0x68 => Ok(Self::Mainnet),
            0x98 => Ok(Self::Testnet),
            0x60 => Ok(Self::Private),
            0x90 => Ok(Self::PrivateTest),
            other => Err(ModelError::UnknownNetworkType(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Address derivation
// ---------------------------------------------------------------------------

impl Address {
    /// Derives the address owned by `public_key` on `network`.
    ///
    /// Layout: `network_byte | sha256d(key)[0..20] | sha256(prefix)[0..4]`.
    /// The checksum covers the network byte and the digest, so an address
    /// copied across networks fails validation instead of silently pointing
    /// at a different account.
    pub fn from_public_key(network: NetworkType, public_key: &PublicKey) -> Self {
        let digest = Sha256::digest(Sha256::digest(public_key.as_bytes()));
        let mut raw = [0u8; 25];
        raw[0] = network as u8;
        raw[1..21].copy_from_slice(&digest[..20]);
        let checksum = Sha256::digest(&raw[..21]);
        raw[21..25].copy_from_slice(&checksum[..4]);
        Self(raw)
    }

    /// The network this address belongs to.
    pub fn network(&self) -> Result<NetworkType, ModelError> {
        NetworkType::from_raw(self.0[0])
    }
}

// ---------------------------------------------------------------------------
// PublicAccount
// ---------------------------------------------------------------------------

/// A public key together with the address it controls.
///
/// The pairing is what the multisig graph hands back: quorum counting works
/// on public keys, repository lookups work on addresses, and converting
/// between the two on the fly would force re-derivation in a hot loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicAccount {
    pub public_key: PublicKey,
    pub address: Address,
}

impl PublicAccount {
    /// Builds the account owned by `public_key` on `network`.
    pub fn from_public_key(network: NetworkType, public_key: PublicKey) -> Self {
        Self {
            public_key,
            address: Address::from_public_key(network, &public_key),
        }
    }
}

// ---------------------------------------------------------------------------
// UnresolvedAddress
// ---------------------------------------------------------------------------

/// A recipient slot that is either a concrete address or a namespace alias
/// the network resolves at execution time.
///
/// Both forms occupy the same fixed 25-byte wire slot; the low bit of the
/// leading byte distinguishes them. See [`crate::codec`] for the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnresolvedAddress {
    /// A fully resolved 25-byte address.
    Address(Address),
    /// A namespace alias, resolved by the node against the alias registry.
    Alias(NamespaceId),
}

impl From<Address> for UnresolvedAddress {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<NamespaceId> for UnresolvedAddress {
    fn from(id: NamespaceId) -> Self {
        Self::Alias(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_hex_roundtrip() {
        let hex = "9a49366406aca952b88badf5f1e9be6ce4968141035a60be503273ea65456b24";
        let key = PublicKey::from_hex(hex).unwrap();
        assert_eq!(key.to_string(), hex);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            PublicKey::from_hex("abcd"),
            Err(ModelError::InvalidLength { expected: 32, actual: 2, .. })
        ));
    }

    #[test]
    fn zero_sentinel() {
        assert!(Signature::default().is_zero());
        assert!(!PublicKey::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn network_type_roundtrip() {
        for network in [
            NetworkType::Mainnet,
            NetworkType::Testnet,
            NetworkType::Private,
            NetworkType::PrivateTest,
        ] {
            assert_eq!(NetworkType::from_raw(network as u8).unwrap(), network);
        }
        assert!(NetworkType::from_raw(0x42).is_err());
    }

    #[test]
    fn address_derivation_is_deterministic() {
        let key = PublicKey::from_bytes([7u8; 32]);
        let a = Address::from_public_key(NetworkType::PrivateTest, &key);
        let b = Address::from_public_key(NetworkType::PrivateTest, &key);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes()[0], 0x90);
        assert_eq!(a.network().unwrap(), NetworkType::PrivateTest);
    }

    #[test]
    fn address_depends_on_network() {
        let key = PublicKey::from_bytes([7u8; 32]);
        let main = Address::from_public_key(NetworkType::Mainnet, &key);
        let test = Address::from_public_key(NetworkType::Testnet, &key);
        assert_ne!(main, test);
    }

    #[test]
    fn newtype_json_is_hex_string() {
        let key = PublicKey::from_bytes([0xab; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
