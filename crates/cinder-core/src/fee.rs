//! Coin-hour fee policy.
//!
//! Every spend destroys part of its input hours. With burn factor `B`, at
//! least `ceil(total / B)` of the `total = output_hours + burned_hours` must
//! be burned, and a transaction that burns nothing is rejected outright.

use crate::constants::BURN_FACTOR;
use crate::error::FeeError;
use crate::traits::FeePolicy;

/// Fixed-ratio burn policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnFeePolicy {
    burn_factor: u64,
}

impl BurnFeePolicy {
    /// Create a policy with a custom burn factor. Factors below 2 are rejected.
    pub fn new(burn_factor: u64) -> Result<Self, FeeError> {
        if burn_factor < 2 {
            return Err(FeeError::InvalidBurnFactor(burn_factor));
        }
        Ok(Self { burn_factor })
    }
}

impl Default for BurnFeePolicy {
    fn default() -> Self {
        Self {
            burn_factor: BURN_FACTOR,
        }
    }
}

impl FeePolicy for BurnFeePolicy {
    fn burn_factor(&self) -> u64 {
        self.burn_factor
    }

    fn verify_fee(&self, output_hours: u64, burned_hours: u64) -> Result<(), FeeError> {
        if burned_hours == 0 {
            return Err(FeeError::NoFee);
        }

        let total = output_hours
            .checked_add(burned_hours)
            .ok_or(FeeError::Overflow)?;
        let required = self.required_fee(total);
        if burned_hours < required {
            return Err(FeeError::InsufficientFee {
                burned: burned_hours,
                required,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_burn_factor() {
        assert_eq!(BurnFeePolicy::default().burn_factor(), BURN_FACTOR);
    }

    #[test]
    fn reject_small_burn_factor() {
        assert_eq!(BurnFeePolicy::new(0), Err(FeeError::InvalidBurnFactor(0)));
        assert_eq!(BurnFeePolicy::new(1), Err(FeeError::InvalidBurnFactor(1)));
        assert!(BurnFeePolicy::new(2).is_ok());
        assert_eq!(BurnFeePolicy::new(10).unwrap().burn_factor(), 10);
    }

    #[test]
    fn required_fee_rounds_up() {
        let p = BurnFeePolicy::default();
        assert_eq!(p.required_fee(0), 0);
        assert_eq!(p.required_fee(1), 1);
        assert_eq!(p.required_fee(2), 1);
        assert_eq!(p.required_fee(3), 2);
        assert_eq!(p.required_fee(300), 150);
    }

    #[test]
    fn zero_burn_is_no_fee() {
        let p = BurnFeePolicy::default();
        assert_eq!(p.verify_fee(0, 0), Err(FeeError::NoFee));
        assert_eq!(p.verify_fee(10, 0), Err(FeeError::NoFee));
    }

    #[test]
    fn half_burn_accepted() {
        let p = BurnFeePolicy::default();
        assert_eq!(p.verify_fee(150, 150), Ok(()));
        assert_eq!(p.verify_fee(0, 1), Ok(()));
        assert_eq!(p.verify_fee(1, 2), Ok(()));
    }

    #[test]
    fn under_burn_rejected() {
        let p = BurnFeePolicy::default();
        assert_eq!(
            p.verify_fee(151, 150),
            Err(FeeError::InsufficientFee {
                burned: 150,
                required: 151,
            })
        );
    }

    #[test]
    fn larger_factor_requires_smaller_burn() {
        let p = BurnFeePolicy::new(4).unwrap();
        // total 100: at least 25 must burn
        assert_eq!(p.verify_fee(75, 25), Ok(()));
        assert!(p.verify_fee(76, 24).is_err());
    }

    #[test]
    fn overflow_detected() {
        let p = BurnFeePolicy::default();
        assert_eq!(p.verify_fee(u64::MAX, 1), Err(FeeError::Overflow));
    }
}
