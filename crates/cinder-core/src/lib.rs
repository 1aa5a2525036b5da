//! # cinder-core
//! Foundation types, address encoding and the coin-hour fee policy.

pub mod address;
pub mod constants;
pub mod crypto;
pub mod droplets;
pub mod error;
pub mod fee;
pub mod traits;
pub mod types;
