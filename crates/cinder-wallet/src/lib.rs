//! # cinder-wallet
//! Deterministic wallet and coin-hour aware output building.
//!
//! Provides a validated wallet metadata and entry store, deterministic
//! address generation from a seed chain, and construction of transaction
//! outputs that split coin hours between change and destinations under the
//! network's burn rule.
//!
//! # Modules
//!
//! - [`error`]: `WalletError` and `SchemaViolation`
//! - [`meta`]: metadata map and known keys
//! - [`validate`]: metadata schema checks
//! - [`entry`]: address plus key pair
//! - [`mnemonic`]: BIP-39 seed phrases
//! - [`storage`]: `WalletStore` with file and in-memory backends
//! - [`config`]: `WalletConfig`
//! - [`hours`]: coin-hour distribution
//! - [`builder`]: `OutputBuilder`
//! - [`wallet`]: high-level wallet composition

pub mod builder;
pub mod config;
pub mod entry;
pub mod error;
pub mod hours;
pub mod meta;
pub mod mnemonic;
pub mod storage;
pub mod validate;
pub mod wallet;

// Re-exports for convenient access
pub use builder::{OutputBuilder, make_change_outputs};
pub use config::WalletConfig;
pub use entry::Entry;
pub use error::{SchemaViolation, WalletError};
pub use hours::{HourDistribution, HourDistributor, distribute_spend_hours};
pub use meta::{Meta, WalletType};
pub use storage::{FileStore, MemoryStore, RawEntry, WalletRecord, WalletStore};
pub use validate::validate_meta;
pub use wallet::{Wallet, WalletOptions};
