//! Ed25519 signature creation and verification.

use ed25519_dalek::{Signer, Verifier};

use super::keys::{PublicKey, SecretKey};
use crate::error::{CryptoError, DecodeError};
use crate::serialization::{Cursor, Decode, Encode, IntEncoding, Sink};

/// An Ed25519 signature carried as raw bytes.
///
/// The wire form is the 64 raw signature bytes with no length prefix, like
/// every fixed-width value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Wrap raw signature bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    /// The raw signature bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}..)", hex::encode(&self.0[..6]))
    }
}

impl Encode for Signature {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S, _encoding: IntEncoding) {
        sink.write(&self.0);
    }
}

impl Decode for Signature {
    fn decode(cursor: &mut Cursor<'_>, _encoding: IntEncoding) -> Result<Self, DecodeError> {
        Ok(Signature(cursor.take_array()?))
    }
}

/// Sign a message with a secret key.
pub fn sign(secret_key: &SecretKey, message: &[u8]) -> Signature {
    Signature(secret_key.sign(message).to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Fails with [`CryptoError::InvalidPublicKey`] if the key bytes are not a
/// valid curve point, or [`CryptoError::SignatureVerificationFailed`] if the
/// signature does not match.
pub fn verify(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), CryptoError> {
    let key = public_key.to_verifying_key()?;
    let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
    key.verify(message, &signature)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;
    use crate::serialization::{deserialize, serialize};

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let message = b"canonical bytes";

        let signature = sign(kp.signing_key(), message);
        assert!(verify(&kp.public_key(), message, &signature).is_ok());
    }

    #[test]
    fn test_verify_rejects_tampered_message() {
        let kp = KeyPair::generate();
        let signature = sign(kp.signing_key(), b"original");

        assert_eq!(
            verify(&kp.public_key(), b"tampered", &signature),
            Err(CryptoError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();
        let signature = sign(kp1.signing_key(), b"message");

        assert!(verify(&kp2.public_key(), b"message", &signature).is_err());
    }

    #[test]
    fn test_signature_roundtrip() {
        let kp = KeyPair::generate();
        let signature = sign(kp.signing_key(), b"message");

        let bytes = serialize(&signature);
        assert_eq!(bytes.len(), 64);
        assert_eq!(deserialize::<Signature>(&bytes).unwrap(), signature);
    }
}
