//! Short address derivation.
//!
//! A short address is the first 20 bytes of the SHA-256 hash of the Ed25519
//! public key. This keeps addresses compact and avoids exposing the full
//! public key until the owner signs something.

use super::hashing::sha256;
use super::keys::PublicKey;

/// Derive a short address from a public key.
///
/// The address is the first 20 bytes of SHA-256(public_key_bytes).
pub fn short_address(public_key: &PublicKey) -> [u8; 20] {
    let hash = sha256(public_key.as_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[..20]);
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;

    #[test]
    fn test_address_determinism() {
        let kp = KeyPair::generate();
        assert_eq!(short_address(&kp.public_key()), short_address(&kp.public_key()));
    }

    #[test]
    fn test_different_keys_different_addresses() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();
        assert_ne!(short_address(&kp1.public_key()), short_address(&kp2.public_key()));
    }

    #[test]
    fn test_address_is_first_20_bytes_of_hash() {
        let kp = KeyPair::generate();
        let full_hash = sha256(kp.public_key().as_bytes());
        let address = short_address(&kp.public_key());

        assert_eq!(&full_hash[..20], &address[..]);
    }
}
