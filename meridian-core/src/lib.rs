//! # Meridian Core
//!
//! Core types, cryptography, and canonical serialization for the Meridian
//! protocol.
//!
//! This crate provides the foundation for all other Meridian crates:
//! - Canonical deterministic binary serialization (the consensus codec)
//! - Cryptographic primitives (Ed25519 signatures, SHA-512 consensus digests)
//! - Transaction structure (type tag, inputs, outputs, opaque payload)
//! - Block structure and Merkle tree computation
//!
//! Every value that participates in consensus is hashed and signed over its
//! canonical byte encoding, so two independently running nodes must produce
//! byte-identical output for the same logical value. The codec in
//! [`serialization`] is the single source of truth for those bytes.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod block;
pub mod crypto;
pub mod error;
pub mod serialization;
pub mod transaction;

// Re-export commonly used types at crate root
pub use block::{Block, BlockHeader};
pub use crypto::{
    hash_full, merkle_root, short_address, sign, verify, Hash, HashWriter, KeyPair, PublicKey,
    SecretKey, Signature,
};
pub use error::{CoreError, CryptoError, DecodeError};
pub use serialization::{
    decode, deserialize, serialize, serialize_into, Cursor, Decode, Encode, IntEncoding, Sink,
};
pub use transaction::{Input, Output, Transaction, TxType};
