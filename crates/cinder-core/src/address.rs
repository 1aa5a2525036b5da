//! Address encoding for the Cinder network.
//!
//! An address is the 20-byte prefix of the BLAKE3 hash of a public key,
//! followed by a version byte and a 4-byte checksum, encoded with Base58:
//!
//! ```text
//! base58( key_hash[20] || version[1] || blake3(key_hash || version)[..4] )
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::ADDRESS_VERSION;
use crate::crypto::PublicKey;
use crate::error::AddressError;

/// Length of the key hash carried by an address.
pub const KEY_HASH_LEN: usize = 20;

/// Length of the trailing checksum.
const CHECKSUM_LEN: usize = 4;

/// Decoded byte length: key hash + version + checksum.
const ADDRESS_BYTES: usize = KEY_HASH_LEN + 1 + CHECKSUM_LEN;

/// A Cinder address.
///
/// Ordering and hashing use the raw key hash, so two addresses compare equal
/// exactly when their encodings are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    version: u8,
    key_hash: [u8; KEY_HASH_LEN],
}

impl Address {
    /// Create an address from a raw key hash.
    pub fn from_key_hash(key_hash: [u8; KEY_HASH_LEN]) -> Self {
        Self {
            version: ADDRESS_VERSION,
            key_hash,
        }
    }

    /// Create the address owned by a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let digest = blake3::hash(&public_key.to_bytes());
        let mut key_hash = [0u8; KEY_HASH_LEN];
        key_hash.copy_from_slice(&digest.as_bytes()[..KEY_HASH_LEN]);
        Self::from_key_hash(key_hash)
    }

    /// The key hash encoded in this address.
    pub fn key_hash(&self) -> &[u8; KEY_HASH_LEN] {
        &self.key_hash
    }

    /// The address version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Raw 25-byte form including checksum.
    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        let mut out = [0u8; ADDRESS_BYTES];
        out[..KEY_HASH_LEN].copy_from_slice(&self.key_hash);
        out[KEY_HASH_LEN] = self.version;
        out[KEY_HASH_LEN + 1..].copy_from_slice(&checksum(&self.key_hash, self.version));
        out
    }

    /// Encode this address as a Base58 string.
    pub fn encode(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Decode a Base58 address string.
    pub fn decode(s: &str) -> Result<Self, AddressError> {
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|_| AddressError::InvalidBase58)?;
        Self::from_bytes(&raw)
    }

    /// Parse the raw 25-byte form, verifying version and checksum.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, AddressError> {
        if raw.len() != ADDRESS_BYTES {
            return Err(AddressError::InvalidLength(raw.len()));
        }

        let mut key_hash = [0u8; KEY_HASH_LEN];
        key_hash.copy_from_slice(&raw[..KEY_HASH_LEN]);
        let version = raw[KEY_HASH_LEN];

        if version != ADDRESS_VERSION {
            return Err(AddressError::InvalidVersion(version));
        }
        if raw[KEY_HASH_LEN + 1..] != checksum(&key_hash, version) {
            return Err(AddressError::InvalidChecksum);
        }

        Ok(Self { version, key_hash })
    }
}

fn checksum(key_hash: &[u8; KEY_HASH_LEN], version: u8) -> [u8; CHECKSUM_LEN] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(key_hash);
    hasher.update(&[version]);
    let digest = hasher.finalize();
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest.as_bytes()[..CHECKSUM_LEN]);
    out
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}
