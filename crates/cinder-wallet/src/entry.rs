//! Wallet entries: an address with its key pair.

use serde::{Deserialize, Serialize};

use cinder_core::address::Address;
use cinder_core::crypto::{PublicKey, SecretKey};
use cinder_core::error::CryptoError;
use cinder_core::traits::KeyMaterial;

/// One address owned by a wallet, with the keys that control it.
///
/// Entries are never mutated after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub address: Address,
    #[serde(rename = "public_key")]
    pub public: PublicKey,
    #[serde(rename = "secret_key")]
    pub secret: SecretKey,
}

impl Entry {
    /// Build a consistent entry from a secret key.
    pub fn from_secret_key(key_material: &dyn KeyMaterial, secret: SecretKey) -> Self {
        let public = secret.public_key();
        let address = key_material.address_from_public_key(&public);
        Self {
            address,
            public,
            secret,
        }
    }

    /// Check that the public key and address both follow from the secret key.
    pub fn verify(&self, key_material: &dyn KeyMaterial) -> Result<(), CryptoError> {
        if self.secret.public_key() != self.public {
            return Err(CryptoError::PublicKeyMismatch);
        }
        if key_material.address_from_public_key(&self.public) != self.address {
            return Err(CryptoError::AddressMismatch);
        }
        Ok(())
    }
}
