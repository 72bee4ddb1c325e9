//! # Ed25519 Signer
//!
//! Keyring adapter for the `Signer` port. The account address is the native
//! encoding of the public key.

use crate::ports::Signer;
use ed25519_dalek::{Signer as _, SigningKey, Verifier, VerifyingKey};
use xh_01_address_codec::{encode_with_prefix, CodecError, CrossIdentity, NetworkPrefix};

/// Ed25519 signing account.
pub struct Ed25519Signer {
    key: SigningKey,
    address: String,
}

impl Ed25519Signer {
    /// Deterministic signer from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32], prefix: NetworkPrefix) -> Result<Self, CodecError> {
        let key = SigningKey::from_bytes(&seed);
        let address = encode_with_prefix(key.verifying_key().as_bytes(), prefix)?;
        Ok(Self { key, address })
    }

    /// Public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.key.verifying_key().to_bytes()
    }

    /// Signer as a native identity.
    pub fn identity(&self) -> CrossIdentity {
        CrossIdentity::Native(self.address.clone())
    }

    /// Verify a signature produced by this signer.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        verify_signature(&self.public_key(), payload, signature)
    }
}

impl Signer for Ed25519Signer {
    fn address(&self) -> &str {
        &self.address
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        self.key.sign(payload).to_bytes().to_vec()
    }
}

/// Verify an Ed25519 signature against a public key.
pub fn verify_signature(public_key: &[u8; 32], payload: &[u8], signature: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify(payload, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xh_01_address_codec::decode_account;

    #[test]
    fn test_address_encodes_public_key() {
        let signer = Ed25519Signer::from_seed([7u8; 32], NetworkPrefix::GENERIC).unwrap();
        let (key, prefix) = decode_account(signer.address()).unwrap();
        assert_eq!(key, signer.public_key());
        assert_eq!(prefix, NetworkPrefix::GENERIC);
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = Ed25519Signer::from_seed([1u8; 32], NetworkPrefix::GENERIC).unwrap();
        let signature = signer.sign(b"payload");
        assert_eq!(signature.len(), 64);
        assert!(signer.verify(b"payload", &signature));
        assert!(!signer.verify(b"tampered", &signature));
    }

    #[test]
    fn test_deterministic_from_seed() {
        let a = Ed25519Signer::from_seed([3u8; 32], NetworkPrefix::GENERIC).unwrap();
        let b = Ed25519Signer::from_seed([3u8; 32], NetworkPrefix::GENERIC).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.sign(b"x"), b.sign(b"x"));
    }
}
