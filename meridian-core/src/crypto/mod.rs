//! Cryptographic primitives for the Meridian protocol.
//!
//! This module provides:
//! - The 64-byte consensus digest ([`Hash`]) and canonical-byte hashing
//!   ([`hash_full`] streams a value's encoding straight into SHA-512)
//! - Merkle tree computation over transaction hashes
//! - Ed25519 key pair generation, signing, and verification
//! - Short address derivation (first 20 bytes of SHA-256 of the public key)

mod address;
mod hashing;
mod keys;
mod signing;

pub use address::short_address;
pub use hashing::{hash_full, hash_pair, merkle_root, sha256, Hash, HashWriter, HASH_SIZE};
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use signing::{sign, verify, Signature};
