//! Block structure containing header and transactions.

use crate::block::BlockHeader;
use crate::crypto::{merkle_root, Hash};
use crate::error::DecodeError;
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};
use crate::transaction::Transaction;

/// A block containing a header and ordered transactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block header with metadata and commitments.
    pub header: BlockHeader,

    /// Ordered list of transactions in this block.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Compute the Merkle root over the transaction hashes.
    pub fn compute_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(|tx| tx.hash()).collect();
        merkle_root(&tx_hashes)
    }

    /// Verify that the header's Merkle root matches the transactions.
    pub fn verify_merkle_root(&self) -> bool {
        self.header.merkle_root == self.compute_merkle_root()
    }

    /// Get the block hash (delegates to header).
    #[inline]
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Get the block height.
    #[inline]
    pub fn height(&self) -> u64 {
        self.header.height
    }

    /// Check if this is a genesis block.
    #[inline]
    pub fn is_genesis(&self) -> bool {
        self.header.is_genesis()
    }

    /// Get the number of transactions.
    #[inline]
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}

impl Encode for Block {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.header.encode(sink, encoding);
        self.transactions.encode(sink, encoding);
    }
}

impl Decode for Block {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Block {
            header: BlockHeader::decode(cursor, encoding)?,
            transactions: Vec::decode(cursor, encoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{sign, KeyPair};
    use crate::serialization::{deserialize, serialize};
    use crate::transaction::{Input, Output, TxType};

    fn test_transaction(value: u64) -> Transaction {
        let kp = KeyPair::generate();
        Transaction {
            tx_type: TxType::Payment,
            inputs: vec![Input {
                previous: Hash::ZERO,
                index: 0,
                signature: sign(kp.signing_key(), b"spend"),
            }],
            outputs: vec![Output {
                value,
                address: kp.public_key(),
            }],
            payload: Vec::new(),
        }
    }

    fn test_block(transactions: Vec<Transaction>) -> Block {
        let tx_hashes: Vec<Hash> = transactions.iter().map(|tx| tx.hash()).collect();
        Block {
            header: BlockHeader {
                version: BlockHeader::VERSION,
                height: 1,
                timestamp: 1700000000,
                prev_block: Hash::from_bytes([0xAB; 64]),
                merkle_root: merkle_root(&tx_hashes),
            },
            transactions,
        }
    }

    #[test]
    fn test_empty_block() {
        let block = test_block(vec![]);
        assert_eq!(block.tx_count(), 0);
        assert_eq!(block.compute_merkle_root(), Hash::ZERO);
        assert!(block.verify_merkle_root());
    }

    #[test]
    fn test_single_transaction() {
        let tx = test_transaction(100);
        let block = test_block(vec![tx.clone()]);

        assert_eq!(block.tx_count(), 1);
        assert!(block.verify_merkle_root());

        // Merkle root of a single tx is just the tx hash
        assert_eq!(block.compute_merkle_root(), tx.hash());
    }

    #[test]
    fn test_multiple_transactions() {
        let transactions: Vec<Transaction> = (0..5).map(test_transaction).collect();
        let block = test_block(transactions);

        assert_eq!(block.tx_count(), 5);
        assert!(block.verify_merkle_root());
    }

    #[test]
    fn test_verify_merkle_root_fails_with_wrong_root() {
        let mut block = test_block(vec![test_transaction(1)]);
        block.header.merkle_root = Hash::ZERO;
        assert!(!block.verify_merkle_root());
    }

    #[test]
    fn test_block_roundtrip() {
        let block = test_block((0..3).map(test_transaction).collect());
        let decoded: Block = deserialize(&serialize(&block)).unwrap();
        assert_eq!(decoded, block);
        assert_eq!(decoded.hash(), block.hash());
    }
}
