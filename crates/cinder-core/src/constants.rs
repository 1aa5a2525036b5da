//! Protocol constants. All coin amounts in droplets (1 CINDER = 10^6 droplets).

/// Droplets per whole coin.
pub const COIN: u64 = 1_000_000;

/// Number of decimal places a coin amount may carry.
pub const MAX_DECIMALS: u32 = 6;

/// Divisor applied to input hours to get the hours a transaction may carry forward.
///
/// The remaining `input_hours - input_hours / BURN_FACTOR` hours are destroyed.
pub const BURN_FACTOR: u64 = 2;

/// Coin name written to new wallets unless overridden.
pub const DEFAULT_COIN: &str = "cinder";

/// Current address version byte.
pub const ADDRESS_VERSION: u8 = 0;
