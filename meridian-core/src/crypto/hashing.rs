//! Consensus digests and canonical-byte hashing.
//!
//! Every consensus hash in the protocol is SHA-512 over a value's canonical
//! byte encoding. [`HashWriter`] implements the codec's
//! [`Sink`](crate::serialization::Sink), so [`hash_full`] digests the bytes
//! as they are produced without buffering them.

use sha2::{Digest, Sha256, Sha512};

use crate::error::{CryptoError, DecodeError};
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};

/// Width of the consensus digest in bytes.
pub const HASH_SIZE: usize = 64;

/// A 64-byte consensus digest.
///
/// Encodes as exactly 64 raw bytes with no length prefix; a prefix would
/// change the canonical bytes of every value embedding a hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// The all-zero digest, used for absent references (e.g. the genesis
    /// block's predecessor) and the Merkle root of an empty list.
    pub const ZERO: Hash = Hash([0u8; HASH_SIZE]);

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// The raw digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Parse a digest from its 128-character hex form.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s).map_err(|_| CryptoError::InvalidHash)?;
        let bytes: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidHash)?;
        Ok(Hash(bytes))
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Abbreviated hex keeps assertion output readable
        write!(f, "Hash({}..)", hex::encode(&self.0[..6]))
    }
}

impl Encode for Hash {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&self.0);
    }
}

impl Decode for Hash {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Hash(cursor.take_array()?))
    }
}

/// A [`Sink`] that digests written bytes instead of storing them.
pub struct HashWriter(Sha512);

impl HashWriter {
    /// Start a fresh digest.
    pub fn new() -> Self {
        HashWriter(Sha512::new())
    }

    /// Finalize and return the digest.
    pub fn finish(self) -> Hash {
        let mut digest = [0u8; HASH_SIZE];
        digest.copy_from_slice(&self.0.finalize());
        Hash(digest)
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        HashWriter::new()
    }
}

impl Sink for HashWriter {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}

/// Hash a value over its canonical byte encoding.
///
/// This is the consensus hash: transaction IDs, block hashes and signed
/// payloads are all `hash_full` of the respective aggregate.
pub fn hash_full<T: Encode + ?Sized>(value: &T) -> Hash {
    let mut writer = HashWriter::new();
    value.encode(&mut writer, IntEncoding::Compact);
    writer.finish()
}

/// Hash the concatenation of two digests (Merkle interior node).
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut writer = HashWriter::new();
    writer.write(left.as_bytes());
    writer.write(right.as_bytes());
    writer.finish()
}

/// Compute SHA-256 of the input data.
///
/// Used for short address derivation only; consensus digests are SHA-512.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Merkle root of a list of digests.
///
/// Binary tree construction:
/// - Empty list returns [`Hash::ZERO`]
/// - A single digest is its own root
/// - Otherwise digests are paired and hashed recursively
/// - An odd leaf is duplicated
pub fn merkle_root(hashes: &[Hash]) -> Hash {
    if hashes.is_empty() {
        return Hash::ZERO;
    }
    if hashes.len() == 1 {
        return hashes[0];
    }

    let mut level: Vec<Hash> = hashes.to_vec();

    while level.len() > 1 {
        let mut next_level = Vec::with_capacity(level.len().div_ceil(2));

        for chunk in level.chunks(2) {
            let combined = if chunk.len() == 2 {
                hash_pair(&chunk[0], &chunk[1])
            } else {
                // Odd leaf: duplicate it
                hash_pair(&chunk[0], &chunk[0])
            };
            next_level.push(combined);
        }

        level = next_level;
    }

    level[0]
}
