//! Error types for the Meridian core crate.

use std::fmt;

/// Top-level error type for meridian-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Cryptographic operation failed.
    Crypto(CryptoError),
    /// Decoding canonical bytes failed.
    Decode(DecodeError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Crypto(e) => write!(f, "crypto error: {}", e),
            CoreError::Decode(e) => write!(f, "decode error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<CryptoError> for CoreError {
    fn from(e: CryptoError) -> Self {
        CoreError::Crypto(e)
    }
}

impl From<DecodeError> for CoreError {
    fn from(e: DecodeError) -> Self {
        CoreError::Decode(e)
    }
}

/// Errors related to cryptographic operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// The public key bytes do not form a valid curve point.
    InvalidPublicKey,
    /// The secret key is malformed or invalid.
    InvalidSecretKey,
    /// A hex string does not decode to a digest of the expected width.
    InvalidHash,
    /// Signature verification failed (signature doesn't match message/key).
    SignatureVerificationFailed,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidPublicKey => write!(f, "invalid public key format"),
            CryptoError::InvalidSecretKey => write!(f, "invalid secret key format"),
            CryptoError::InvalidHash => write!(f, "invalid hash format"),
            CryptoError::SignatureVerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Errors raised while decoding canonical bytes.
///
/// Encoding has no failure path: every supported type has a total encoding.
/// Decoding fails on truncated input, on compact integers that exceed the
/// target width, on malformed text, and on enum discriminants that name no
/// declared variant. Failures are surfaced immediately; the codec never
/// returns a partial value and never retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The cursor was asked for more bytes than remain.
    Truncated {
        /// Number of bytes the decoder needed.
        requested: usize,
        /// Number of bytes left in the input.
        remaining: usize,
    },
    /// A compact-encoded integer exceeds the target type's range.
    Overflow {
        /// The decoded value.
        value: u64,
        /// The maximum value the target type can hold.
        max: u64,
    },
    /// Decoded string bytes are not well-formed UTF-8.
    InvalidUtf8(std::str::Utf8Error),
    /// An enum discriminant names no declared variant.
    UnknownTag {
        /// Name of the enum being decoded.
        kind: &'static str,
        /// The offending discriminant byte.
        tag: u8,
    },
    /// A strict top-level decode left bytes unconsumed.
    TrailingBytes {
        /// Number of unconsumed bytes.
        remaining: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated {
                requested,
                remaining,
            } => write!(
                f,
                "truncated input: needed {} bytes, {} remain",
                requested, remaining
            ),
            DecodeError::Overflow { value, max } => {
                write!(f, "integer overflow: {} exceeds maximum {}", value, max)
            }
            DecodeError::InvalidUtf8(e) => write!(f, "invalid utf-8 in string field: {}", e),
            DecodeError::UnknownTag { kind, tag } => {
                write!(f, "unknown {} discriminant: {:#04x}", kind, tag)
            }
            DecodeError::TrailingBytes { remaining } => {
                write!(f, "{} trailing bytes after top-level value", remaining)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(e: std::str::Utf8Error) -> Self {
        DecodeError::InvalidUtf8(e)
    }
}
