//! Block structure for the Meridian protocol.
//!
//! Blocks carry an ordered list of transactions and commit to them through
//! a Merkle root in the header. The block hash is the consensus hash of the
//! header's canonical bytes.

#[allow(clippy::module_inception)]
mod block;
mod header;

pub use block::Block;
pub use header::BlockHeader;
