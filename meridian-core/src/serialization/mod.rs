//! Canonical binary serialization for the Meridian protocol.
//!
//! All consensus data structures are serialized with this codec. The output
//! is deterministic: the same logical value always produces the same bytes on
//! every platform, which is what makes transaction IDs, block hashes and
//! signatures meaningful across independently running nodes.
//!
//! Wire rules:
//! - Multi-byte fixed-width scalars are little-endian.
//! - Unsigned integers wider than one byte default to the compact varint
//!   form ([`varint`]); [`IntEncoding::Fixed`] forces raw little-endian.
//! - Signed 64-bit integers are always raw 8 bytes little-endian.
//! - Fixed-width values (digests, keys, signatures) carry no length prefix.
//! - Sequences are a compact count followed by their elements; the count is
//!   compact regardless of the integer encoding in force.
//! - Aggregates encode their fields in declaration order; a type may instead
//!   provide its own [`Encode`]/[`Decode`] impl, which replaces the
//!   field-by-field rule entirely.
//!
//! Encoding is total and writes straight through a [`Sink`] with no
//! intermediate tree; decoding mirrors it over a [`Cursor`] and fails with a
//! typed [`DecodeError`](crate::error::DecodeError) on malformed input.

mod decode;
mod encode;
pub mod varint;

pub use decode::{Cursor, Decode};
pub use encode::{Encode, Sink};

use crate::error::DecodeError;

/// How unsigned integers wider than one byte are encoded.
///
/// Threaded explicitly through every encode/decode call; there is no global
/// mode. [`IntEncoding::Compact`] is the protocol default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntEncoding {
    /// Variable-length form: small values occupy a single byte.
    #[default]
    Compact,
    /// Raw fixed-width little-endian form.
    Fixed,
}

/// Serialize a value to its canonical byte sequence.
///
/// Uses the default compact integer encoding. Encoding cannot fail for
/// supported types, so this returns the buffer directly.
pub fn serialize<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.encode(&mut buf, IntEncoding::Compact);
    buf
}

/// Serialize a value into an existing sink with an explicit integer encoding.
///
/// The sink can be a plain `Vec<u8>` or a hashing writer such as
/// [`HashWriter`](crate::crypto::HashWriter), in which case the canonical
/// bytes are digested without ever being buffered.
pub fn serialize_into<T, S>(value: &T, sink: &mut S, encoding: IntEncoding)
where
    T: Encode + ?Sized,
    S: Sink + ?Sized,
{
    value.encode(sink, encoding);
}

/// Deserialize a value from a flat byte buffer.
///
/// Strict: the buffer must contain exactly one encoded value. Trailing bytes
/// are rejected with [`DecodeError::TrailingBytes`]; callers decoding a
/// concatenation of records should use a [`Cursor`] with [`decode`] instead
/// and re-invoke it on the remainder.
pub fn deserialize<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut cursor = Cursor::new(bytes);
    let value = T::decode(&mut cursor, IntEncoding::Compact)?;
    if !cursor.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: cursor.remaining(),
        });
    }
    Ok(value)
}

/// Deserialize a value from a cursor with an explicit integer encoding.
///
/// Consumes exactly the bytes of one value and leaves the remainder in the
/// cursor, so concatenated records decode by calling this repeatedly.
pub fn decode<T: Decode>(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<T, DecodeError> {
    T::decode(cursor, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rejects_trailing_bytes() {
        let mut bytes = serialize(&42u64);
        bytes.push(0xFF);

        let result: Result<u64, _> = deserialize(&bytes);
        assert_eq!(result, Err(DecodeError::TrailingBytes { remaining: 1 }));
    }

    #[test]
    fn test_decode_leaves_remainder() {
        let mut bytes = serialize(&1u8);
        bytes.extend_from_slice(&serialize(&2u8));

        let mut cursor = Cursor::new(&bytes);
        let first: u8 = decode(&mut cursor, IntEncoding::Compact).unwrap();
        assert_eq!(first, 1);
        assert_eq!(cursor.remaining(), 1);
        let second: u8 = decode(&mut cursor, IntEncoding::Compact).unwrap();
        assert_eq!(second, 2);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_determinism() {
        let value = (0u64..100).collect::<Vec<u64>>();
        assert_eq!(serialize(&value), serialize(&value));
    }
}
