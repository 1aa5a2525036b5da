//! Coin-hour distribution across change and destination outputs.
//!
//! A spend may carry forward `spendable = input_hours / B` hours, where `B`
//! is the fee policy's burn factor. When there is a change output it takes
//! the larger half, `ceil(spendable / 2)`. The rest is split over the
//! destinations so that no two differ by more than one hour, with earlier
//! destinations receiving the extra hour.
//!
//! ```text
//! input 33, B = 2, 3 destinations, change
//!   spendable = 16, change = 8, pool = 8
//!   base = 2, remainder = 2  ->  [3, 3, 2]
//! ```

use cinder_core::error::FeeError;
use cinder_core::traits::FeePolicy;

use crate::error::WalletError;

/// Result of splitting input hours over a transaction's outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourDistribution {
    /// Hours assigned to the change output (0 without change).
    pub change_hours: u64,
    /// Hours per destination, in destination order.
    pub destination_hours: Vec<u64>,
    /// `change_hours + sum(destination_hours)`.
    pub total_hours: u64,
}

impl HourDistribution {
    /// Hours destroyed by the transaction.
    pub fn burned(&self, input_hours: u64) -> u64 {
        input_hours - self.total_hours
    }
}

/// Split `input_hours` for a spend with `n_destinations` destinations.
///
/// Pure integer arithmetic; `input_hours == 0` yields all zeros.
pub fn distribute_spend_hours(
    input_hours: u64,
    n_destinations: usize,
    have_change: bool,
    burn_factor: u64,
) -> Result<HourDistribution, WalletError> {
    if n_destinations == 0 {
        return Err(WalletError::NoDestinations);
    }
    if burn_factor < 2 {
        return Err(FeeError::InvalidBurnFactor(burn_factor).into());
    }

    let spendable = input_hours / burn_factor;

    let change_hours = if have_change { spendable.div_ceil(2) } else { 0 };
    let pool = spendable - change_hours;

    let n = n_destinations as u64;
    let base = pool / n;
    let remainder = (pool % n) as usize;

    let destination_hours: Vec<u64> = (0..n_destinations)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect();

    Ok(HourDistribution {
        change_hours,
        destination_hours,
        total_hours: spendable,
    })
}

/// Hour distribution bound to a fee policy.
///
/// Reads the burn factor from the policy and certifies every non-trivial
/// result against the policy's fee rule.
pub struct HourDistributor<'a> {
    policy: &'a dyn FeePolicy,
}

impl<'a> HourDistributor<'a> {
    pub fn new(policy: &'a dyn FeePolicy) -> Self {
        Self { policy }
    }

    /// Distribute `input_hours`; see [`distribute_spend_hours`].
    ///
    /// Zero input hours yields all zeros without consulting the fee policy.
    pub fn distribute(
        &self,
        input_hours: u64,
        n_destinations: usize,
        have_change: bool,
    ) -> Result<HourDistribution, WalletError> {
        let dist = self.split(input_hours, n_destinations, have_change)?;
        if input_hours > 0 {
            self.certify(&dist, input_hours)?;
        }
        Ok(dist)
    }

    /// Like [`distribute`](Self::distribute), but the burn is always
    /// certified, so zero input hours fails with `NoFee`.
    pub fn distribute_certified(
        &self,
        input_hours: u64,
        n_destinations: usize,
        have_change: bool,
    ) -> Result<HourDistribution, WalletError> {
        let dist = self.split(input_hours, n_destinations, have_change)?;
        self.certify(&dist, input_hours)?;
        Ok(dist)
    }

    fn split(
        &self,
        input_hours: u64,
        n_destinations: usize,
        have_change: bool,
    ) -> Result<HourDistribution, WalletError> {
        distribute_spend_hours(
            input_hours,
            n_destinations,
            have_change,
            self.policy.burn_factor(),
        )
    }

    fn certify(&self, dist: &HourDistribution, input_hours: u64) -> Result<(), WalletError> {
        self.policy
            .verify_fee(dist.total_hours, dist.burned(input_hours))?;
        Ok(())
    }
}
