//! Wallet configuration.
//!
//! Provides [`WalletConfig`] with defaults for the wallet directory, coin
//! name, burn factor and log level. Values can be set programmatically or
//! read from a JSON file; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use cinder_core::constants::{BURN_FACTOR, DEFAULT_COIN};
use cinder_core::fee::BurnFeePolicy;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::wallet::WalletOptions;

/// File extension for wallet files.
pub const WALLET_EXT: &str = "wlt";

/// Configuration shared by wallet operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Directory holding `.wlt` files.
    pub wallet_dir: PathBuf,
    /// Coin name written to new wallets.
    pub coin: String,
    /// Burn factor for the fee policy.
    pub burn_factor: u64,
    /// Log level filter string (e.g. "info", "cinder_wallet=debug").
    pub log_level: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        let wallet_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cinder")
            .join("wallets");

        Self {
            wallet_dir,
            coin: DEFAULT_COIN.to_string(),
            burn_factor: BURN_FACTOR,
            log_level: "info".to_string(),
        }
    }
}

impl WalletConfig {
    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, WalletError> {
        let data = std::fs::read(path).map_err(|e| WalletError::Io(e.to_string()))?;
        serde_json::from_slice(&data)
            .map_err(|e| WalletError::Serialization(format!("{}: {e}", path.display())))
    }

    /// Fee policy for the configured burn factor.
    pub fn fee_policy(&self) -> Result<BurnFeePolicy, WalletError> {
        Ok(BurnFeePolicy::new(self.burn_factor)?)
    }

    /// Path of the wallet file called `name`, adding the `.wlt` extension
    /// when absent.
    pub fn wallet_path(&self, name: &str) -> PathBuf {
        let path = self.wallet_dir.join(name);
        if path.extension().is_some_and(|ext| ext == WALLET_EXT) {
            path
        } else {
            path.with_extension(WALLET_EXT)
        }
    }

    /// Wallet options preloaded with the configured coin.
    pub fn options(&self) -> WalletOptions {
        WalletOptions::new().coin(self.coin.clone())
    }
}
