//! The encoding half of the canonical codec.
//!
//! [`Encode`] is implemented for every wire-visible type. Scalar and
//! sequence impls live here; fixed-width crypto wrappers and aggregate
//! protocol types carry their own impls next to their definitions, which is
//! also the override point for types whose wire form differs from the
//! generic field-by-field rule.

use super::varint::encode_varint;
use super::IntEncoding;

/// An append-only byte sink.
///
/// The codec writes depth-first through a sink as it walks a value; no
/// intermediate tree is built. Implemented for `Vec<u8>` and for
/// [`HashWriter`](crate::crypto::HashWriter). A sink lives for one encode
/// call and is not meant to be shared across concurrent operations.
pub trait Sink {
    /// Append `bytes` to the output.
    fn write(&mut self, bytes: &[u8]);
}

impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// A type with a canonical byte encoding.
///
/// Encoding is total: every supported type encodes without error. The
/// integer encoding flag is threaded through recursive calls so that nested
/// unsigned integers all observe the same mode.
pub trait Encode {
    /// Write the canonical bytes of `self` to `sink`.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding);
}

impl Encode for bool {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&[u8::from(*self)]);
    }
}

impl Encode for u8 {
    // A single byte is already minimal; the compact form never applies.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&[*self]);
    }
}

impl Encode for u16 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        match encoding {
            IntEncoding::Compact => encode_varint(u64::from(*self), sink),
            IntEncoding::Fixed => sink.write(&self.to_le_bytes()),
        }
    }
}

impl Encode for u32 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        match encoding {
            IntEncoding::Compact => encode_varint(u64::from(*self), sink),
            IntEncoding::Fixed => sink.write(&self.to_le_bytes()),
        }
    }
}

impl Encode for u64 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        match encoding {
            IntEncoding::Compact => encode_varint(*self, sink),
            IntEncoding::Fixed => sink.write(&self.to_le_bytes()),
        }
    }
}

impl Encode for i64 {
    // Signed integers are never compact-encoded.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&self.to_le_bytes());
    }
}

impl<const N: usize> Encode for [u8; N] {
    // Fixed-width blob: exactly N raw bytes, no length prefix. Prefixing a
    // statically sized value would change its canonical bytes and therefore
    // its hash.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(self);
    }
}

impl Encode for str {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        encode_varint(self.len() as u64, sink);
        sink.write(self.as_bytes());
    }
}

impl Encode for String {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.as_str().encode(sink, encoding);
    }
}

impl<T: Encode> Encode for [T] {
    // Sequence: compact element count, then elements in order. The count
    // stays compact even under IntEncoding::Fixed; the flag only governs
    // integer payloads.
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        encode_varint(self.len() as u64, sink);
        for element in self {
            element.encode(sink, encoding);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        self.as_slice().encode(sink, encoding);
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, encoding: IntEncoding) {
        (**self).encode(sink, encoding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::serialize;

    fn encoded<T: Encode>(value: &T, encoding: IntEncoding) -> Vec<u8> {
        let mut buf = Vec::new();
        value.encode(&mut buf, encoding);
        buf
    }

    #[test]
    fn test_bool_is_one_byte() {
        assert_eq!(serialize(&true), [0x01]);
        assert_eq!(serialize(&false), [0x00]);
    }

    #[test]
    fn test_u8_ignores_encoding() {
        assert_eq!(encoded(&0xABu8, IntEncoding::Compact), [0xAB]);
        assert_eq!(encoded(&0xABu8, IntEncoding::Fixed), [0xAB]);
    }

    #[test]
    fn test_unsigned_compact_vs_fixed() {
        assert_eq!(encoded(&300u16, IntEncoding::Compact), [0xFD, 0x2C, 0x01]);
        assert_eq!(encoded(&300u16, IntEncoding::Fixed), [0x2C, 0x01]);
        assert_eq!(encoded(&1u32, IntEncoding::Compact), [0x01]);
        assert_eq!(encoded(&1u32, IntEncoding::Fixed), [0x01, 0x00, 0x00, 0x00]);
        assert_eq!(encoded(&1u64, IntEncoding::Fixed).len(), 8);
    }

    #[test]
    fn test_i64_always_fixed_little_endian() {
        assert_eq!(
            encoded(&1i64, IntEncoding::Compact),
            [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            encoded(&-1i64, IntEncoding::Compact),
            [0xFF; 8]
        );
    }

    #[test]
    fn test_fixed_blob_has_no_length_prefix() {
        let digest = [0u8; 64];
        assert_eq!(serialize(&digest), vec![0u8; 64]);
    }

    #[test]
    fn test_string_is_length_prefixed() {
        assert_eq!(serialize("abc"), [3, b'a', b'b', b'c']);
        assert_eq!(serialize(""), [0]);
    }

    #[test]
    fn test_empty_sequence_is_single_zero_byte() {
        let empty: Vec<u64> = Vec::new();
        assert_eq!(serialize(&empty), [0x00]);
    }

    #[test]
    fn test_sequence_elements_follow_their_own_rule() {
        // [0, 1, 2] as u32, fixed mode: count byte then three LE words
        let values: Vec<u32> = vec![0, 1, 2];
        assert_eq!(
            encoded(&values, IntEncoding::Fixed),
            [
                0x03, // count, compact regardless of mode
                0x00, 0x00, 0x00, 0x00, //
                0x01, 0x00, 0x00, 0x00, //
                0x02, 0x00, 0x00, 0x00,
            ]
        );
    }
}
