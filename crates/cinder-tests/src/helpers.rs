//! Shared test helpers.

use cinder_core::address::Address;
use cinder_core::types::{SpendRequest, TransactionOutput, UnspentOutput};
use cinder_wallet::config::WalletConfig;
use tracing_subscriber::EnvFilter;

/// Subscriber filter for `config.log_level`, falling back to `info` when the
/// directive does not parse.
pub fn env_filter(config: &WalletConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route `tracing` output to the test writer. `RUST_LOG` wins over the
/// default config's log level; safe to call from every test.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| env_filter(&WalletConfig::default()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Deterministic address from a seed byte.
pub fn addr(seed: u8) -> Address {
    Address::from_key_hash([seed; 20])
}

/// One unspent output per `(coins, hours)` pair, owned by `addr(0xF0)`.
pub fn inputs(values: &[(u64, u64)]) -> Vec<UnspentOutput> {
    values
        .iter()
        .map(|&(coins, hours)| UnspentOutput::new(addr(0xF0), coins, hours))
        .collect()
}

/// One spend request per amount, to `addr(1)`, `addr(2)`, ...
pub fn spends(coins: &[u64]) -> Vec<SpendRequest> {
    coins
        .iter()
        .enumerate()
        .map(|(i, &c)| SpendRequest::new(addr(i as u8 + 1), c))
        .collect()
}

/// Sum of hours across outputs.
pub fn total_hours(outputs: &[TransactionOutput]) -> u64 {
    outputs.iter().map(|o| o.hours).sum()
}

/// Sum of coins across outputs.
pub fn total_coins(outputs: &[TransactionOutput]) -> u64 {
    outputs.iter().map(|o| o.coins).sum()
}
