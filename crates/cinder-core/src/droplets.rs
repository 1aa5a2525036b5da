//! Exact conversion between decimal coin strings and droplets.
//!
//! `"400"` is 400 coins (`400 * COIN` droplets), `"0.000001"` is one droplet.
//! No floating point is involved at any step.

use crate::constants::{COIN, MAX_DECIMALS};
use crate::error::AmountError;

/// Parse a decimal coin string into droplets.
pub fn from_str(s: &str) -> Result<u64, AmountError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Invalid(s.to_string()));
    }

    let whole: u64 = whole
        .parse()
        .map_err(|_| AmountError::Overflow)?;
    let mut droplets = whole.checked_mul(COIN).ok_or(AmountError::Overflow)?;

    if let Some(frac) = frac {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Invalid(s.to_string()));
        }
        if frac.len() > MAX_DECIMALS as usize {
            return Err(AmountError::TooManyDecimals(s.to_string()));
        }
        let scale = 10u64.pow(MAX_DECIMALS - frac.len() as u32);
        let frac: u64 = frac
            .parse()
            .map_err(|_| AmountError::Invalid(s.to_string()))?;
        droplets = droplets
            .checked_add(frac * scale)
            .ok_or(AmountError::Overflow)?;
    }

    Ok(droplets)
}

/// Format droplets as a decimal coin string without trailing zeros.
pub fn to_string(droplets: u64) -> String {
    let whole = droplets / COIN;
    let frac = droplets % COIN;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = MAX_DECIMALS as usize);
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
