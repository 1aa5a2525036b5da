//! Wallet error types.

use std::fmt;

use cinder_core::address::Address;
use cinder_core::error::{AddressError, CryptoError, FeeError, ParseError};
use thiserror::Error;

/// A metadata field that is missing or malformed.
///
/// Variants are listed in the order validation checks them; the first one
/// encountered is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaViolation {
    /// `type` is not set.
    TypeMissing,
    /// `type` is set to something other than a known wallet kind.
    TypeInvalid,
    /// `coin` is not set or empty.
    CoinMissing,
    /// `seed` is not set or empty on a deterministic wallet.
    SeedMissing,
    /// `filename` is not set or empty.
    FilenameMissing,
    /// `lastSeed` is set but is not 32 hex-encoded bytes.
    LastSeedInvalid,
}

impl SchemaViolation {
    /// The metadata key the violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TypeMissing | Self::TypeInvalid => "type",
            Self::CoinMissing => "coin",
            Self::SeedMissing => "seed",
            Self::FilenameMissing => "filename",
            Self::LastSeedInvalid => "lastSeed",
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeInvalid => write!(f, "wallet type invalid"),
            Self::LastSeedInvalid => write!(f, "lastSeed field invalid"),
            other => write!(f, "{} field not set", other.field()),
        }
    }
}

/// Errors that can occur in wallet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The requested wallet resource does not exist.
    #[error("load wallet file failed, wallet {name} doesn't exist")]
    NotFound {
        /// Identifier the caller asked for.
        name: String,
    },

    /// Loaded metadata failed validation.
    #[error("invalid wallet {wallet}: {violation}")]
    InvalidSchema {
        /// Base name of the wallet resource.
        wallet: String,
        /// First violation found.
        violation: SchemaViolation,
    },

    /// Construction options produced metadata that fails validation.
    #[error("invalid wallet options: {violation}")]
    InvalidConfig {
        /// First violation found.
        violation: SchemaViolation,
    },

    /// An entry with the same address is already present.
    #[error("duplicate address entry: {address}")]
    DuplicateEntry {
        /// The conflicting address.
        address: Address,
    },

    /// Requested coins exceed the coins held by the inputs.
    #[error("insufficient coins: have {have}, need {need}")]
    InsufficientCoins {
        /// Input coins in droplets.
        have: u64,
        /// Requested coins in droplets.
        need: u64,
    },

    /// A spend needs at least one destination.
    #[error("no destinations")]
    NoDestinations,

    /// Invalid monetary amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Summing coins or hours overflowed.
    #[error("amount overflow")]
    AmountOverflow,

    /// Fee rule violation from the fee policy.
    #[error(transparent)]
    Fee(#[from] FeeError),

    /// Malformed address string.
    #[error(transparent)]
    Decode(#[from] AddressError),

    /// Malformed readable amount or address.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Key material inconsistency.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Invalid seed phrase.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("serialization: {0}")]
    Serialization(String),
}
