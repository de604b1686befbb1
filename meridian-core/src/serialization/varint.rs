//! Compact variable-length unsigned integer encoding.
//!
//! Small values (the common case for counts and amounts) occupy a single
//! byte; larger values pay a one-byte marker plus their little-endian
//! fixed-width form:
//!
//! | Value range        | Encoding                         |
//! |--------------------|----------------------------------|
//! | 0 ..= 252          | 1 byte: the value itself         |
//! | 253 ..= 65535      | `0xFD` + 2 bytes little-endian   |
//! | 65536 ..= 2^32 - 1 | `0xFE` + 4 bytes little-endian   |
//! | 2^32 ..= 2^64 - 1  | `0xFF` + 8 bytes little-endian   |

use super::decode::Cursor;
use super::encode::Sink;
use crate::error::DecodeError;

/// Marker byte introducing a 2-byte value.
const MARKER_U16: u8 = 0xFD;
/// Marker byte introducing a 4-byte value.
const MARKER_U32: u8 = 0xFE;
/// Marker byte introducing an 8-byte value.
const MARKER_U64: u8 = 0xFF;

/// Largest value that encodes as a single byte.
pub const MAX_SINGLE_BYTE: u8 = 0xFC;

/// Write `value` to the sink in its smallest self-describing form.
pub fn encode_varint<S: Sink + ?Sized>(value: u64, sink: &mut S) {
    match value {
        0..=0xFC => sink.write(&[value as u8]),
        0xFD..=0xFFFF => {
            sink.write(&[MARKER_U16]);
            sink.write(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            sink.write(&[MARKER_U32]);
            sink.write(&(value as u32).to_le_bytes());
        }
        _ => {
            sink.write(&[MARKER_U64]);
            sink.write(&value.to_le_bytes());
        }
    }
}

/// Read one varint from the cursor.
///
/// Never fails on range since `u64` is the widest supported integer; callers
/// decoding into a narrower target apply [`narrow`] afterwards.
pub fn decode_varint(cursor: &mut Cursor<'_>) -> Result<u64, DecodeError> {
    let lead = cursor.take(1)?[0];
    match lead {
        MARKER_U16 => Ok(u64::from(u16::from_le_bytes(cursor.take_array()?))),
        MARKER_U32 => Ok(u64::from(u32::from_le_bytes(cursor.take_array()?))),
        MARKER_U64 => Ok(u64::from_le_bytes(cursor.take_array()?)),
        value => Ok(u64::from(value)),
    }
}

/// Range-check a decoded varint against a narrower target type's maximum.
pub fn narrow(value: u64, max: u64) -> Result<u64, DecodeError> {
    if value > max {
        Err(DecodeError::Overflow { value, max })
    } else {
        Ok(value)
    }
}
