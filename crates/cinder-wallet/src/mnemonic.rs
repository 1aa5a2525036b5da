//! BIP-39 seed phrases for newly created wallets.

use bip39::{Language, Mnemonic};
use rand::RngCore;

use crate::error::WalletError;

/// Entropy for a 12-word phrase.
const ENTROPY_BYTES: usize = 16;

/// Generate a random 12-word English seed phrase.
pub fn generate_seed_phrase() -> Result<String, WalletError> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let m = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(m.to_string())
}

/// Check a seed phrase and return it in canonical form: single spaces,
/// lowercase.
pub fn validate_seed_phrase(phrase: &str) -> Result<String, WalletError> {
    let normalized = phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let m = Mnemonic::parse_in(Language::English, &normalized)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(m.to_string())
}
