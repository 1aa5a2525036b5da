//! Wallet metadata: a string-to-string map with a fixed set of known keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Wallet label shown to users.
pub const META_LABEL: &str = "label";
/// Coin name (`"cinder"` unless overridden).
pub const META_COIN: &str = "coin";
/// Wallet kind, see [`WalletType`].
pub const META_TYPE: &str = "type";
/// Seed for deterministic wallets.
pub const META_SEED: &str = "seed";
/// Hex-encoded tail of the seed chain after the last generated address.
pub const META_LAST_SEED: &str = "lastSeed";
/// Wallet file name.
pub const META_FILENAME: &str = "filename";
/// Creation time in unix seconds.
pub const META_TM: &str = "tm";
/// Wallet format version.
pub const META_VERSION: &str = "version";

/// Recognized wallet kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalletType {
    /// All key pairs derive from a single seed.
    #[default]
    Deterministic,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deterministic" => Ok(Self::Deterministic),
            _ => Err(()),
        }
    }
}

/// Wallet metadata map.
///
/// Keys are kept sorted so serialized output is stable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Meta(BTreeMap<String, String>);

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key` if set and non-empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub(crate) fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Meta {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Meta {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
