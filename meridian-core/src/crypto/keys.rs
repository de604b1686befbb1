//! Ed25519 key pair generation and management.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::{CryptoError, DecodeError};
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};

/// Type alias for Ed25519 secret/signing key.
pub type SecretKey = SigningKey;

/// An Ed25519 public key carried as raw bytes.
///
/// The wire form is the 32 raw key bytes with no length prefix. Point
/// validity is checked at verification time, not at decode time: the codec
/// treats the key as an opaque fixed-width value, so any 32 bytes decode
/// (and re-encode to the same bytes), and [`verify`](super::verify) rejects
/// keys that are not valid curve points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wrap raw key bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    /// The raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Interpret the bytes as a curve point.
    pub(crate) fn to_verifying_key(self) -> Result<VerifyingKey, CryptoError> {
        VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        PublicKey(key.to_bytes())
    }
}

impl Encode for PublicKey {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&self.0);
    }
}

impl Decode for PublicKey {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(PublicKey(cursor.take_array()?))
    }
}

/// An Ed25519 key pair.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair from the OS entropy source.
    pub fn generate() -> Self {
        KeyPair {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Reconstruct a key pair from secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Self {
        KeyPair {
            signing_key: SigningKey::from_bytes(bytes),
        }
    }

    /// The public half of the pair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// The secret signing key.
    pub fn signing_key(&self) -> &SecretKey {
        &self.signing_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{deserialize, serialize};

    #[test]
    fn test_public_key_roundtrip() {
        let kp = KeyPair::generate();
        let pk = kp.public_key();

        let bytes = serialize(&pk);
        assert_eq!(bytes.len(), 32);
        assert_eq!(deserialize::<PublicKey>(&bytes).unwrap(), pk);
    }

    #[test]
    fn test_generated_key_is_valid_point() {
        let kp = KeyPair::generate();
        assert!(kp.public_key().to_verifying_key().is_ok());
    }

    #[test]
    fn test_from_secret_bytes_is_deterministic() {
        let kp = KeyPair::generate();
        let restored = KeyPair::from_secret_bytes(&kp.signing_key().to_bytes());
        assert_eq!(kp.public_key(), restored.public_key());
    }
}
