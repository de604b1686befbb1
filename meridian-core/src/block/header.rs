//! Block header structure.

use crate::crypto::{hash_full, Hash};
use crate::error::DecodeError;
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};

/// Block header containing metadata and commitments.
///
/// The block hash is the consensus hash of the header's canonical bytes;
/// transaction bodies are committed through `merkle_root`, not hashed
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version (currently 1).
    pub version: u32,

    /// Block height (0 for genesis).
    pub height: u64,

    /// Unix timestamp in seconds.
    pub timestamp: u64,

    /// Consensus hash of the previous block header.
    /// [`Hash::ZERO`] for the genesis block.
    pub prev_block: Hash,

    /// Merkle root over the hashes of this block's transactions.
    pub merkle_root: Hash,
}

impl BlockHeader {
    /// Protocol version number.
    pub const VERSION: u32 = 1;

    /// Compute the block hash: the consensus hash of the canonical header
    /// bytes.
    pub fn hash(&self) -> Hash {
        hash_full(self)
    }

    /// Check if this is a genesis block header.
    #[inline]
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.prev_block == Hash::ZERO
    }
}

impl Encode for BlockHeader {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.version.encode(sink, encoding);
        self.height.encode(sink, encoding);
        self.timestamp.encode(sink, encoding);
        self.prev_block.encode(sink, encoding);
        self.merkle_root.encode(sink, encoding);
    }
}

impl Decode for BlockHeader {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(BlockHeader {
            version: u32::decode(cursor, encoding)?,
            height: u64::decode(cursor, encoding)?,
            timestamp: u64::decode(cursor, encoding)?,
            prev_block: Hash::decode(cursor, encoding)?,
            merkle_root: Hash::decode(cursor, encoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{deserialize, serialize};

    fn test_header() -> BlockHeader {
        BlockHeader {
            version: BlockHeader::VERSION,
            height: 0,
            timestamp: 1700000000,
            prev_block: Hash::ZERO,
            merkle_root: hash_full(&1u64),
        }
    }

    #[test]
    fn test_header_roundtrip() {
        let header = test_header();
        let decoded: BlockHeader = deserialize(&serialize(&header)).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_block_hash_determinism() {
        let header = test_header();
        assert_eq!(header.hash(), header.hash());
    }

    #[test]
    fn test_block_hash_changes_with_content() {
        let header = test_header();
        let mut other = header;
        other.height = 1;
        assert_ne!(other.hash(), header.hash());
    }

    #[test]
    fn test_is_genesis() {
        let header = test_header();
        assert!(header.is_genesis());

        let mut next = header;
        next.height = 1;
        next.prev_block = header.hash();
        assert!(!next.is_genesis());
    }
}
