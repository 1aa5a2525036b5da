//! Error types for the Cinder protocol.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58 string")] InvalidBase58,
    #[error("invalid length: {0}")] InvalidLength(usize),
    #[error("invalid checksum")] InvalidChecksum,
    #[error("invalid version: {0}")] InvalidVersion(u8),
    #[error("empty address")] Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid public key bytes")] InvalidPublicKey,
    #[error("invalid secret key bytes")] InvalidSecretKey,
    #[error("public key does not match secret key")] PublicKeyMismatch,
    #[error("address does not match public key")] AddressMismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("transaction has zero coinhour fee")] NoFee,
    #[error("transaction coinhour fee minimum not met: burned {burned}, required {required}")] InsufficientFee { burned: u64, required: u64 },
    #[error("hours and fee overflow")] Overflow,
    #[error("invalid burn factor: {0}")] InvalidBurnFactor(u64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")] Empty,
    #[error("invalid amount: {0}")] Invalid(String),
    #[error("too many decimal places: {0}")] TooManyDecimals(String),
    #[error("amount overflow")] Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("address: {0}")] Address(#[from] AddressError),
    #[error("amount: {0}")] Amount(#[from] AmountError),
}
