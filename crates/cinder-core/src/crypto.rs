//! Ed25519 key material for Cinder wallets.
//!
//! Wraps ed25519-dalek behind [`PublicKey`] and [`SecretKey`] and provides
//! [`Ed25519KeyMaterial`], the default [`KeyMaterial`] implementation used by
//! wallets to derive key pairs from seed bytes with the BLAKE3 KDF.
//!
//! Both key types serialize as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::Address;
use crate::error::{AddressError, CryptoError};
use crate::traits::KeyMaterial;

/// BLAKE3 KDF context for seed-to-secret-key derivation.
const KDF_CONTEXT: &str = "cinder-wallet key-pair derivation v1";

/// 32-byte Ed25519 secret key.
///
/// Zeroized on drop. `Debug` never prints the key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; 32],
}

impl SecretKey {
    /// Create a secret key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| CryptoError::InvalidSecretKey)?;
        Ok(Self { bytes })
    }

    /// Get the raw secret key bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Hex encoding of the key bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&self.bytes);
        PublicKey {
            verifying_key: signing_key.verifying_key(),
        }
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Ed25519 public key, used to derive addresses.
#[derive(Clone)]
pub struct PublicKey {
    verifying_key: ed25519_dalek::VerifyingKey,
}

impl PublicKey {
    /// Create a public key from raw bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let vk = ed25519_dalek::VerifyingKey::from_bytes(bytes)
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self { verifying_key: vk })
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(&bytes)
    }

    /// Get the raw public key bytes (32 bytes).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Hex encoding of the key bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

impl std::hash::Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Derive the secret key for a seed with the BLAKE3 KDF.
pub fn secret_key_from_seed(seed: &[u8]) -> SecretKey {
    SecretKey::from_bytes(blake3::derive_key(KDF_CONTEXT, seed))
}

/// Default [`KeyMaterial`]: Ed25519 keys, BLAKE3-derived secrets, Base58 addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519KeyMaterial;

impl KeyMaterial for Ed25519KeyMaterial {
    fn derive_key_pair(&self, seed: &[u8]) -> (PublicKey, SecretKey) {
        let secret = secret_key_from_seed(seed);
        (secret.public_key(), secret)
    }

    fn address_from_public_key(&self, public_key: &PublicKey) -> Address {
        Address::from_public_key(public_key)
    }

    fn decode_address(&self, s: &str) -> Result<Address, AddressError> {
        Address::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_hex_roundtrip() {
        let sk = SecretKey::from_bytes([0xAB; 32]);
        let back = SecretKey::from_hex(&sk.to_hex()).unwrap();
        assert_eq!(sk, back);
    }

    #[test]
    fn secret_key_from_bad_hex_fails() {
        assert_eq!(SecretKey::from_hex("zz"), Err(CryptoError::InvalidSecretKey));
        assert_eq!(SecretKey::from_hex("abcd"), Err(CryptoError::InvalidSecretKey));
    }

    #[test]
    fn secret_key_debug_hides_bytes() {
        let sk = SecretKey::from_bytes([0xAB; 32]);
        let debug = format!("{sk:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("ab"));
    }

    #[test]
    fn seed_derived_keys_differ() {
        assert_ne!(secret_key_from_seed(b"one"), secret_key_from_seed(b"two"));
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = SecretKey::from_bytes([5u8; 32]).public_key();
        let back = PublicKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(pk, back);
    }

    #[test]
    fn public_key_from_short_hex_fails() {
        assert_eq!(PublicKey::from_hex("00"), Err(CryptoError::InvalidPublicKey));
    }

    #[test]
    fn derive_key_pair_deterministic() {
        let km = Ed25519KeyMaterial;
        let (pk1, sk1) = km.derive_key_pair(b"seed words");
        let (pk2, sk2) = km.derive_key_pair(b"seed words");
        assert_eq!(pk1, pk2);
        assert_eq!(sk1, sk2);
        assert_eq!(sk1.public_key(), pk1);
    }

    #[test]
    fn derive_key_pair_unique_per_seed() {
        let km = Ed25519KeyMaterial;
        let (pk1, _) = km.derive_key_pair(b"seed one");
        let (pk2, _) = km.derive_key_pair(b"seed two");
        assert_ne!(pk1, pk2);
    }

    #[test]
    fn key_material_address_roundtrip() {
        let km = Ed25519KeyMaterial;
        let (pk, _) = km.derive_key_pair(b"abc");
        let addr = km.address_from_public_key(&pk);
        assert_eq!(km.decode_address(&addr.encode()).unwrap(), addr);
    }

    #[test]
    fn keys_serialize_as_hex_strings() {
        let sk = SecretKey::from_bytes([1u8; 32]);
        let pk = sk.public_key();
        let sk_json = serde_json::to_string(&sk).unwrap();
        let pk_json = serde_json::to_string(&pk).unwrap();
        assert_eq!(sk_json, format!("\"{}\"", sk.to_hex()));
        assert_eq!(serde_json::from_str::<PublicKey>(&pk_json).unwrap(), pk);
    }
}
