//! Trait interfaces for the Cinder wallet core.
//!
//! These traits are the seams to collaborators the core never implements
//! inline:
//! - [`KeyMaterial`]: key derivation and address encoding ([`Ed25519KeyMaterial`](crate::crypto::Ed25519KeyMaterial) implements)
//! - [`FeePolicy`]: the network's coin-hour burn rule ([`BurnFeePolicy`](crate::fee::BurnFeePolicy) implements)

use crate::address::Address;
use crate::crypto::{PublicKey, SecretKey};
use crate::error::{AddressError, FeeError};

/// Key derivation and address handling.
pub trait KeyMaterial: Send + Sync {
    /// Deterministically derive a key pair from seed bytes.
    fn derive_key_pair(&self, seed: &[u8]) -> (PublicKey, SecretKey);

    /// The address owned by a public key.
    fn address_from_public_key(&self, public_key: &PublicKey) -> Address;

    /// Parse an address string.
    fn decode_address(&self, s: &str) -> Result<Address, AddressError>;
}

/// The coin-hour fee rule enforced by the network.
///
/// A transaction may carry forward at most `input_hours / burn_factor()`
/// hours; everything else is burned as the fee.
pub trait FeePolicy: Send + Sync {
    /// Burn divisor `B`, always at least 2.
    fn burn_factor(&self) -> u64;

    /// Check that `burned_hours` is an acceptable fee for a transaction
    /// whose outputs carry `output_hours`.
    fn verify_fee(&self, output_hours: u64, burned_hours: u64) -> Result<(), FeeError>;

    /// Minimum number of hours that must be burned out of `total_hours`.
    ///
    /// Default: `ceil(total_hours / burn_factor())`.
    fn required_fee(&self, total_hours: u64) -> u64 {
        total_hours.div_ceil(self.burn_factor())
    }
}
