//! Output construction for spend transactions.
//!
//! Given already-selected unspent outputs, a change address and an ordered
//! list of destinations, produces the transaction's output list:
//! 1. Sum input coins and hours
//! 2. Check the destinations are covered and compute coin change
//! 3. Split hours and certify the burn with [`HourDistributor`]
//! 4. Emit the change output first (when there is change), then destinations
//!    in request order
//!
//! The result is a pure function of the arguments.

use cinder_core::address::Address;
use cinder_core::traits::FeePolicy;
use cinder_core::types::{SpendRequest, TransactionOutput, UnspentOutput};
use tracing::debug;

use crate::error::WalletError;
use crate::hours::HourDistributor;

/// Builder for a spend's output list.
///
/// # Example
/// ```ignore
/// let outputs = OutputBuilder::new(&policy)
///     .add_destination(dest, 600 * COIN)
///     .build(&inputs, &change_addr)?;
/// ```
pub struct OutputBuilder<'a> {
    policy: &'a dyn FeePolicy,
    destinations: Vec<SpendRequest>,
}

impl<'a> OutputBuilder<'a> {
    /// Create a builder using `policy` as the source of the burn rule.
    pub fn new(policy: &'a dyn FeePolicy) -> Self {
        Self {
            policy,
            destinations: Vec::new(),
        }
    }

    /// Append a destination. Order determines output order and which
    /// destinations receive the odd hours.
    pub fn add_destination(&mut self, address: Address, coins: u64) -> &mut Self {
        self.destinations.push(SpendRequest::new(address, coins));
        self
    }

    /// Append several destinations.
    pub fn add_requests(&mut self, requests: &[SpendRequest]) -> &mut Self {
        self.destinations.extend_from_slice(requests);
        self
    }

    /// Destinations added so far.
    pub fn destinations(&self) -> &[SpendRequest] {
        &self.destinations
    }

    /// Build the output list.
    ///
    /// # Errors
    /// - [`WalletError::NoDestinations`] without destinations
    /// - [`WalletError::InvalidAmount`] for a zero-coin destination
    /// - [`WalletError::AmountOverflow`] if coin or hour sums overflow
    /// - [`WalletError::InsufficientCoins`] if destinations exceed input coins
    /// - [`WalletError::Fee`] if the fee policy rejects the burn, notably
    ///   `NoFee` when the inputs carry no hours at all
    pub fn build(
        &self,
        inputs: &[UnspentOutput],
        change_address: &Address,
    ) -> Result<Vec<TransactionOutput>, WalletError> {
        if self.destinations.is_empty() {
            return Err(WalletError::NoDestinations);
        }

        let mut input_coins: u64 = 0;
        let mut input_hours: u64 = 0;
        for ux in inputs {
            input_coins = input_coins
                .checked_add(ux.coins)
                .ok_or(WalletError::AmountOverflow)?;
            input_hours = input_hours
                .checked_add(ux.hours)
                .ok_or(WalletError::AmountOverflow)?;
        }

        let mut requested: u64 = 0;
        for (i, d) in self.destinations.iter().enumerate() {
            if d.coins == 0 {
                return Err(WalletError::InvalidAmount(format!(
                    "destination {i} has zero coins"
                )));
            }
            requested = requested
                .checked_add(d.coins)
                .ok_or(WalletError::AmountOverflow)?;
        }

        if requested > input_coins {
            return Err(WalletError::InsufficientCoins {
                have: input_coins,
                need: requested,
            });
        }

        let change_coins = input_coins - requested;
        let have_change = change_coins > 0;

        let hours = HourDistributor::new(self.policy).distribute_certified(
            input_hours,
            self.destinations.len(),
            have_change,
        )?;

        debug!(
            inputs = inputs.len(),
            destinations = self.destinations.len(),
            input_coins,
            input_hours,
            change_coins,
            output_hours = hours.total_hours,
            "built spend outputs"
        );

        let mut outputs = Vec::with_capacity(self.destinations.len() + 1);
        if have_change {
            outputs.push(TransactionOutput {
                address: *change_address,
                coins: change_coins,
                hours: hours.change_hours,
            });
        }
        for (d, h) in self.destinations.iter().zip(&hours.destination_hours) {
            outputs.push(TransactionOutput {
                address: d.address,
                coins: d.coins,
                hours: *h,
            });
        }

        Ok(outputs)
    }
}

/// Build the outputs for spending `inputs` to `spends`, returning change to
/// `change_address`.
pub fn make_change_outputs(
    inputs: &[UnspentOutput],
    change_address: &Address,
    spends: &[SpendRequest],
    policy: &dyn FeePolicy,
) -> Result<Vec<TransactionOutput>, WalletError> {
    OutputBuilder::new(policy)
        .add_requests(spends)
        .build(inputs, change_address)
}
