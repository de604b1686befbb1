//! The decoding half of the canonical codec.
//!
//! A [`Cursor`] is a strictly sequential pull source over a byte slice;
//! [`Decode`] impls consume bytes in exactly the order [`Encode`] wrote
//! them. Decoding never returns a partial value: any failure aborts the
//! whole call and surfaces a typed [`DecodeError`].
//!
//! [`Encode`]: super::Encode

use super::varint::{decode_varint, narrow};
use super::IntEncoding;
use crate::error::DecodeError;

/// A sequential reader over an input buffer.
///
/// The only fallible primitive is [`take`](Cursor::take); consumption is
/// non-resumable, so a failed decode leaves the cursor unusable for further
/// decoding of the same stream. Create one cursor per decode operation.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    /// Wrap a byte slice for sequential consumption.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf }
    }

    /// Consume and return the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() < n {
            return Err(DecodeError::Truncated {
                requested: n,
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Consume the next `N` bytes as a fixed-width array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Number of unconsumed bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Whether all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Check a decoded element count against the bytes actually available.
    ///
    /// Every encodable element occupies at least one byte, so a count larger
    /// than the remaining input is certainly truncated. This runs before any
    /// allocation, so a hostile length prefix cannot drive memory use beyond
    /// the input size.
    fn checked_count(&self, count: u64) -> Result<usize, DecodeError> {
        if count > self.buf.len() as u64 {
            return Err(DecodeError::Truncated {
                requested: usize::try_from(count).unwrap_or(usize::MAX),
                remaining: self.buf.len(),
            });
        }
        Ok(count as usize)
    }
}

/// A type reconstructible from its canonical byte encoding.
///
/// The mirror of [`Encode`](super::Encode): both sides must classify every
/// type identically or round-tripping breaks.
pub trait Decode: Sized {
    /// Consume one value's worth of bytes from `cursor`.
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError>;
}

impl Decode for bool {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(cursor.take(1)?[0] != 0)
    }
}

impl Decode for u8 {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(cursor.take(1)?[0])
    }
}

impl Decode for u16 {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        match encoding {
            IntEncoding::Compact => {
                let value = decode_varint(cursor)?;
                Ok(narrow(value, u64::from(u16::MAX))? as u16)
            }
            IntEncoding::Fixed => Ok(u16::from_le_bytes(cursor.take_array()?)),
        }
    }
}

impl Decode for u32 {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        match encoding {
            IntEncoding::Compact => {
                let value = decode_varint(cursor)?;
                Ok(narrow(value, u64::from(u32::MAX))? as u32)
            }
            IntEncoding::Fixed => Ok(u32::from_le_bytes(cursor.take_array()?)),
        }
    }
}

impl Decode for u64 {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        match encoding {
            IntEncoding::Compact => decode_varint(cursor),
            IntEncoding::Fixed => Ok(u64::from_le_bytes(cursor.take_array()?)),
        }
    }
}

impl Decode for i64 {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(i64::from_le_bytes(cursor.take_array()?))
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        cursor.take_array()
    }
}

impl Decode for String {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        let len = decode_varint(cursor)?;
        let len = cursor.checked_count(len)?;
        let bytes = cursor.take(len)?;
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(cursor: &mut Cursor<'_>, encoding: IntEncoding) -> Result<Self, DecodeError> {
        let count = decode_varint(cursor)?;
        let count = cursor.checked_count(count)?;
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(T::decode(cursor, encoding)?);
        }
        Ok(elements)
    }
}
