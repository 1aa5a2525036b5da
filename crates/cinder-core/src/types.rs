//! Value types exchanged between wallets and transaction assembly.
//!
//! Coin amounts are droplets (see [`constants::COIN`](crate::constants::COIN)),
//! hours are plain integer counts.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::droplets;
use crate::error::ParseError;

/// An unspent output selected as a transaction input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UnspentOutput {
    /// Address that owns the output.
    pub address: Address,
    /// Coin balance in droplets.
    pub coins: u64,
    /// Accumulated coin hours.
    pub hours: u64,
}

impl UnspentOutput {
    pub fn new(address: Address, coins: u64, hours: u64) -> Self {
        Self {
            address,
            coins,
            hours,
        }
    }

    /// Build from the human-readable form reported by a node: an address
    /// string and a decimal coin string such as `"400"` or `"1.25"`.
    pub fn from_readable(address: &str, coins: &str, hours: u64) -> Result<Self, ParseError> {
        Ok(Self {
            address: Address::decode(address)?,
            coins: droplets::from_str(coins)?,
            hours,
        })
    }
}

/// A request to send coins to a destination address.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpendRequest {
    /// Destination address.
    pub address: Address,
    /// Amount in droplets.
    pub coins: u64,
}

impl SpendRequest {
    pub fn new(address: Address, coins: u64) -> Self {
        Self { address, coins }
    }

    /// Parse an address string and a decimal coin string.
    pub fn parse(address: &str, coins: &str) -> Result<Self, ParseError> {
        Ok(Self {
            address: Address::decode(address)?,
            coins: droplets::from_str(coins)?,
        })
    }
}

/// An output of the transaction being built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionOutput {
    /// Receiving address.
    pub address: Address,
    /// Amount in droplets.
    pub coins: u64,
    /// Coin hours carried forward to this output.
    pub hours: u64,
}
