//! # HELIX SDK: transaction layer
//!
//! Client-side building blocks for the HELIX chain:
//!
//! * [`model`]: value objects such as keys, addresses, mosaics,
//!   namespaces, and multisig state snapshots.
//! * [`transaction`]: the closed set of transaction kinds and the builder
//!   that assembles them.
//! * [`codec`]: the canonical binary wire format: [`codec::serialize`] /
//!   [`codec::deserialize`] for top-level transactions and their embedded
//!   aggregate form.
//! * [`service`]: multisig-aware helpers, most notably
//!   [`service::AggregateTransactionService`], which answers whether an
//!   aggregate-complete transaction has collected every cosignature it
//!   needs before it is announced.
//!
//! Signing is out of scope: the SDK carries signatures and signer keys as
//! opaque bytes and writes the all-zero sentinel where they are absent.
//!
//! ## Example
//!
//! ```
//! use helix_sdk::codec;
//! use helix_sdk::model::{Message, Mosaic, NetworkType, UnresolvedAddress, UnresolvedMosaicId, Address};
//! use helix_sdk::transaction::{TransactionBody, TransactionBuilder, TransferBody};
//!
//! let tx = TransactionBuilder::new(
//!     NetworkType::Testnet,
//!     TransactionBody::Transfer(TransferBody {
//!         recipient: UnresolvedAddress::Address(Address::default()),
//!         mosaics: vec![Mosaic::new(UnresolvedMosaicId(1234), 100)],
//!         message: Some(Message::plain("hello")),
//!     }),
//! )
//! .max_fee(2_000_000)
//! .deadline(1_615_853_342_000)
//! .build();
//!
//! let payload = codec::serialize(&tx).unwrap();
//! assert_eq!(payload.len(), codec::size_of(&tx));
//! let back = codec::deserialize(&payload).unwrap();
//! assert_eq!(back, tx);
//! ```

pub mod codec;
pub mod model;
pub mod service;
pub mod transaction;
