//! Transaction structure for the Meridian protocol.
//!
//! A transaction is an aggregate of a type tag, an input sequence, an output
//! sequence and an opaque payload. Its identity is the consensus hash of its
//! canonical bytes, and signatures cover that same hash, so the codec's
//! determinism is what makes transaction IDs and signatures portable across
//! nodes.

use crate::crypto::{hash_full, sign, verify, Hash, PublicKey, SecretKey, Signature};
use crate::error::{CryptoError, DecodeError};
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};

/// Transaction kind discriminant.
///
/// Encodes as its `u8` representation. Decoding validates the tag: the
/// original system cast any byte into the enum unchecked, but a consensus
/// codec must not materialize values it cannot attribute to a declared
/// variant, so an undeclared tag fails with
/// [`DecodeError::UnknownTag`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxType {
    /// Transfers value from inputs to outputs.
    Payment = 0,
    /// Locks value for validator enrollment.
    Freeze = 1,
}

impl Encode for TxType {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        (*self as u8).encode(sink, encoding);
    }
}

impl Decode for TxType {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        match u8::decode(cursor, encoding)? {
            0 => Ok(TxType::Payment),
            1 => Ok(TxType::Freeze),
            tag => Err(DecodeError::UnknownTag {
                kind: "TxType",
                tag,
            }),
        }
    }
}

/// A reference to a previously created output, plus the unlocking signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input {
    /// Hash of the transaction that created the spent output.
    pub previous: Hash,
    /// Index of the output within that transaction.
    pub index: u32,
    /// Signature unlocking the spent output.
    pub signature: Signature,
}

impl Input {
    /// The consensus hash of this input.
    pub fn hash(&self) -> Hash {
        hash_full(self)
    }
}

impl Encode for Input {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.previous.encode(sink, encoding);
        self.index.encode(sink, encoding);
        self.signature.encode(sink, encoding);
    }
}

impl Decode for Input {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Input {
            previous: Hash::decode(cursor, encoding)?,
            index: u32::decode(cursor, encoding)?,
            signature: Signature::decode(cursor, encoding)?,
        })
    }
}

/// A newly created output: an amount locked to an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Output {
    /// Amount in the smallest currency unit.
    pub value: u64,
    /// Public key entitled to spend this output.
    pub address: PublicKey,
}

impl Encode for Output {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.value.encode(sink, encoding);
        self.address.encode(sink, encoding);
    }
}

impl Decode for Output {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Output {
            value: u64::decode(cursor, encoding)?,
            address: PublicKey::decode(cursor, encoding)?,
        })
    }
}

/// A transaction: type tag, inputs, outputs, opaque payload.
///
/// Fields encode in declaration order, each per its own rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction kind.
    pub tx_type: TxType,
    /// Spent outputs with their unlocking signatures.
    pub inputs: Vec<Input>,
    /// Newly created outputs.
    pub outputs: Vec<Output>,
    /// Opaque application payload; the codec does not interpret it.
    pub payload: Vec<u8>,
}

impl Transaction {
    /// The transaction ID: the consensus hash of the canonical bytes.
    pub fn hash(&self) -> Hash {
        hash_full(self)
    }
}

impl Encode for Transaction {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.tx_type.encode(sink, encoding);
        self.inputs.encode(sink, encoding);
        self.outputs.encode(sink, encoding);
        self.payload.encode(sink, encoding);
    }
}

impl Decode for Transaction {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Transaction {
            tx_type: TxType::decode(cursor, encoding)?,
            inputs: Vec::decode(cursor, encoding)?,
            outputs: Vec::decode(cursor, encoding)?,
            payload: Vec::decode(cursor, encoding)?,
        })
    }
}

/// Sign a transaction's consensus hash.
pub fn sign_tx(secret_key: &SecretKey, tx: &Transaction) -> Signature {
    sign(secret_key, tx.hash().as_bytes())
}

/// Verify a signature over a transaction's consensus hash.
pub fn verify_tx(
    public_key: &PublicKey,
    tx: &Transaction,
    signature: &Signature,
) -> Result<(), CryptoError> {
    verify(public_key, tx.hash().as_bytes(), signature)
}
