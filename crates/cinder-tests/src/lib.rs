//! Property and end-to-end test suite for the Cinder wallet core.
//!
//! Integration tests live under `tests/`; shared fixtures are in
//! [`helpers`].

pub mod helpers;
