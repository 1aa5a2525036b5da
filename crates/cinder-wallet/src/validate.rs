//! Metadata schema validation.

use std::str::FromStr;

use crate::error::SchemaViolation;
use crate::meta::{
    Meta, META_COIN, META_FILENAME, META_LAST_SEED, META_SEED, META_TYPE, WalletType,
};

/// Check wallet metadata, returning the first violation.
///
/// Order: type presence, type validity, coin presence, seed presence
/// (deterministic wallets only), filename presence, then the form of the
/// optional `lastSeed`. Pure and repeatable.
pub fn validate_meta(meta: &Meta) -> Result<(), SchemaViolation> {
    let wallet_type = meta
        .get_non_empty(META_TYPE)
        .ok_or(SchemaViolation::TypeMissing)?;
    let wallet_type =
        WalletType::from_str(wallet_type).map_err(|_| SchemaViolation::TypeInvalid)?;

    if meta.get_non_empty(META_COIN).is_none() {
        return Err(SchemaViolation::CoinMissing);
    }

    match wallet_type {
        WalletType::Deterministic => {
            if meta.get_non_empty(META_SEED).is_none() {
                return Err(SchemaViolation::SeedMissing);
            }
        }
    }

    if meta.get_non_empty(META_FILENAME).is_none() {
        return Err(SchemaViolation::FilenameMissing);
    }

    if let Some(last_seed) = meta.get_non_empty(META_LAST_SEED) {
        if decode_last_seed(last_seed).is_none() {
            return Err(SchemaViolation::LastSeedInvalid);
        }
    }

    Ok(())
}

/// Decode a `lastSeed` value into its 32 bytes.
pub(crate) fn decode_last_seed(s: &str) -> Option<[u8; 32]> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).ok()?;
    Some(out)
}
