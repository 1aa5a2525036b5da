//! Wallet composition: metadata, entries, deterministic address generation.
//!
//! A [`Wallet`] is an owned value. It holds the wallet's metadata and its
//! entries in insertion order, with an address index that keeps addresses
//! unique. Nothing here is internally synchronized; callers that share a
//! wallet across threads wrap it in a lock.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use cinder_core::address::Address;
use cinder_core::constants::DEFAULT_COIN;
use cinder_core::crypto::{PublicKey, SecretKey};
use cinder_core::traits::KeyMaterial;
use tracing::{debug, info, warn};

use crate::entry::Entry;
use crate::error::{SchemaViolation, WalletError};
use crate::meta::{
    Meta, META_COIN, META_FILENAME, META_LABEL, META_LAST_SEED, META_SEED, META_TM,
    META_TYPE, META_VERSION, WalletType,
};
use crate::mnemonic;
use crate::storage::{RawEntry, WalletRecord, WalletStore};
use crate::validate::{decode_last_seed, validate_meta};

/// Current wallet format version.
pub const WALLET_VERSION: &str = "0.1";

/// BLAKE3 KDF context for stepping the deterministic seed chain.
const SEED_CHAIN_CONTEXT: &str = "cinder-wallet seed chain v1";

/// Overrides applied when creating a wallet.
#[derive(Clone, Default)]
pub struct WalletOptions {
    label: Option<String>,
    coin: Option<String>,
    seed: Option<String>,
}

impl WalletOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wallet label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the coin name (default: [`DEFAULT_COIN`]).
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Set the seed. Without one, a fresh 12-word phrase is generated.
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the seed from a BIP-39 phrase, checked and normalized to single
    /// spaces and lowercase.
    pub fn mnemonic(self, phrase: &str) -> Result<Self, WalletError> {
        let phrase = mnemonic::validate_seed_phrase(phrase)?;
        Ok(self.seed(phrase))
    }
}

impl fmt::Debug for WalletOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletOptions")
            .field("label", &self.label)
            .field("coin", &self.coin)
            .field("seed", &self.seed.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A deterministic wallet: metadata plus address entries.
#[derive(Clone)]
pub struct Wallet {
    meta: Meta,
    entries: Vec<Entry>,
    /// Address -> position in `entries`.
    index: HashMap<Address, usize>,
}

impl Wallet {
    /// Create a new wallet named `filename`.
    ///
    /// Defaults: empty label, coin [`DEFAULT_COIN`], type `deterministic`,
    /// a generated seed phrase, the current time and [`WALLET_VERSION`].
    /// Fails with [`WalletError::InvalidConfig`] if the resulting metadata
    /// does not validate (for example an empty coin or seed override).
    pub fn new(filename: &str, options: WalletOptions) -> Result<Self, WalletError> {
        let seed = match options.seed {
            Some(seed) => seed,
            None => mnemonic::generate_seed_phrase()?,
        };

        let mut meta = Meta::new();
        meta.set(META_FILENAME, filename);
        meta.set(META_LABEL, options.label.unwrap_or_default());
        meta.set(META_COIN, options.coin.unwrap_or_else(|| DEFAULT_COIN.to_string()));
        meta.set(META_TYPE, WalletType::Deterministic.as_str());
        meta.set(META_SEED, seed);
        meta.set(META_TM, Utc::now().timestamp().to_string());
        meta.set(META_VERSION, WALLET_VERSION);

        validate_meta(&meta).map_err(|violation| WalletError::InvalidConfig { violation })?;

        info!(filename, coin = meta.get(META_COIN), "created wallet");

        Ok(Self {
            meta,
            entries: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Load and validate the wallet stored at `path`.
    ///
    /// The record's `filename` defaults to the base name of `path`. Schema
    /// violations are reported against that base name. Every entry must be
    /// consistent with its keys under `key_material`.
    pub fn load(
        store: &dyn WalletStore,
        key_material: &dyn KeyMaterial,
        path: &Path,
    ) -> Result<Self, WalletError> {
        let record = store.read_wallet(path)?;
        let name = base_name(path);

        let mut meta = record.meta;
        if meta.get_non_empty(META_FILENAME).is_none() {
            meta.set(META_FILENAME, name.as_str());
        }

        if let Err(violation) = validate_meta(&meta) {
            warn!(wallet = %name, field = violation.field(), "invalid wallet");
            return Err(WalletError::InvalidSchema {
                wallet: name,
                violation,
            });
        }

        let mut wallet = Self {
            meta,
            entries: Vec::with_capacity(record.entries.len()),
            index: HashMap::with_capacity(record.entries.len()),
        };
        for raw in &record.entries {
            let entry = decode_entry(key_material, raw)?;
            if let Err(e) = entry.verify(key_material) {
                warn!(wallet = %name, address = %entry.address, "inconsistent wallet entry");
                return Err(e.into());
            }
            wallet.add_entry(entry)?;
        }

        info!(wallet = %name, entries = wallet.len(), "loaded wallet");
        Ok(wallet)
    }

    /// Re-run load-time validation against the current metadata.
    pub fn validate(&self) -> Result<(), WalletError> {
        validate_meta(&self.meta).map_err(|violation| WalletError::InvalidSchema {
            wallet: self.filename().unwrap_or_default().to_string(),
            violation,
        })
    }

    /// Insert an entry. Fails without modifying the wallet if its address
    /// is already present.
    pub fn add_entry(&mut self, entry: Entry) -> Result<(), WalletError> {
        if self.index.contains_key(&entry.address) {
            return Err(WalletError::DuplicateEntry {
                address: entry.address,
            });
        }
        debug!(address = %entry.address, "added wallet entry");
        self.index.insert(entry.address, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up the entry for `address`.
    pub fn get_entry(&self, address: &Address) -> Option<&Entry> {
        self.index.get(address).map(|&i| &self.entries[i])
    }

    /// Derive `n` more addresses from the seed chain.
    ///
    /// The chain starts at `lastSeed` when set, otherwise at the seed bytes;
    /// each step is `next = blake3::derive_key(ctx, current)` and the key pair
    /// comes from `next`. `lastSeed` is updated to the final step. Either all
    /// `n` entries are added or none are.
    pub fn generate_addresses(
        &mut self,
        n: usize,
        key_material: &dyn KeyMaterial,
    ) -> Result<Vec<Address>, WalletError> {
        self.validate()?;

        let mut current: Vec<u8> = match self.meta.get_non_empty(META_LAST_SEED) {
            Some(last) => decode_last_seed(last)
                .ok_or_else(|| WalletError::InvalidSchema {
                    wallet: self.filename().unwrap_or_default().to_string(),
                    violation: SchemaViolation::LastSeedInvalid,
                })?
                .to_vec(),
            None => self.seed().unwrap_or_default().as_bytes().to_vec(),
        };

        let mut fresh = Vec::with_capacity(n);
        let mut fresh_index = HashMap::with_capacity(n);
        for _ in 0..n {
            let next = blake3::derive_key(SEED_CHAIN_CONTEXT, &current);
            let (public, secret) = key_material.derive_key_pair(&next);
            let address = key_material.address_from_public_key(&public);
            if self.index.contains_key(&address) || fresh_index.contains_key(&address) {
                return Err(WalletError::DuplicateEntry { address });
            }
            fresh_index.insert(address, fresh.len());
            fresh.push(Entry {
                address,
                public,
                secret,
            });
            current = next.to_vec();
        }

        let addresses: Vec<Address> = fresh.iter().map(|e| e.address).collect();
        for entry in fresh {
            self.add_entry(entry)?;
        }
        if n > 0 {
            self.meta.set(META_LAST_SEED, hex::encode(&current));
        }

        info!(count = n, total = self.len(), "generated wallet addresses");
        Ok(addresses)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> Vec<Address> {
        self.entries.iter().map(|e| e.address).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn label(&self) -> Option<&str> {
        self.meta.get(META_LABEL)
    }

    pub fn coin(&self) -> Option<&str> {
        self.meta.get(META_COIN)
    }

    pub fn filename(&self) -> Option<&str> {
        self.meta.get(META_FILENAME)
    }

    pub fn seed(&self) -> Option<&str> {
        self.meta.get(META_SEED)
    }

    pub fn last_seed(&self) -> Option<&str> {
        self.meta.get(META_LAST_SEED)
    }

    pub fn version(&self) -> Option<&str> {
        self.meta.get(META_VERSION)
    }

    /// Parsed wallet kind, `None` if missing or unknown.
    pub fn wallet_type(&self) -> Option<WalletType> {
        self.meta.get(META_TYPE)?.parse().ok()
    }

    /// Creation time from the `tm` field.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let secs: i64 = self.meta.get(META_TM)?.parse().ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Storable form of this wallet.
    pub fn to_record(&self) -> WalletRecord {
        WalletRecord {
            meta: self.meta.clone(),
            entries: self
                .entries
                .iter()
                .map(|e| RawEntry {
                    address: e.address.encode(),
                    public_key: e.public.to_hex(),
                    secret_key: e.secret.to_hex(),
                })
                .collect(),
        }
    }

    /// Write this wallet to `path` through `store`.
    pub fn save(&self, store: &dyn WalletStore, path: &Path) -> Result<(), WalletError> {
        store.write_wallet(path, &self.to_record())?;
        debug!(path = %path.display(), entries = self.len(), "saved wallet");
        Ok(())
    }
}

fn decode_entry(key_material: &dyn KeyMaterial, raw: &RawEntry) -> Result<Entry, WalletError> {
    Ok(Entry {
        address: key_material.decode_address(&raw.address)?,
        public: PublicKey::from_hex(&raw.public_key)?,
        secret: SecretKey::from_hex(&raw.secret_key)?,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("filename", &self.filename())
            .field("coin", &self.coin())
            .field("type", &self.meta.get(META_TYPE))
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use cinder_core::crypto::Ed25519KeyMaterial;
    use cinder_core::error::CryptoError;
    use std::path::PathBuf;

    fn testdata(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
    }

    fn seeded(name: &str, seed: &str) -> Wallet {
        Wallet::new(name, WalletOptions::new().seed(seed)).unwrap()
    }

    #[test]
    fn new_wallet_defaults() {
        let w = Wallet::new("test.wlt", WalletOptions::new()).unwrap();
        assert_eq!(w.label(), Some(""));
        assert_eq!(w.filename(), Some("test.wlt"));
        assert_eq!(w.coin(), Some(DEFAULT_COIN));
        assert_eq!(w.wallet_type(), Some(WalletType::Deterministic));
        assert_eq!(w.version(), Some(WALLET_VERSION));
        assert!(w.created_at().is_some());
        assert!(w.is_empty());
        assert_eq!(w.seed().unwrap().split(' ').count(), 12);
        assert_eq!(w.validate(), Ok(()));
    }

    #[test]
    fn new_wallet_with_options() {
        let w = Wallet::new(
            "test.wlt",
            WalletOptions::new()
                .label("wallet1")
                .coin("testcoin")
                .seed("testseed123"),
        )
        .unwrap();
        assert_eq!(w.label(), Some("wallet1"));
        assert_eq!(w.coin(), Some("testcoin"));
        assert_eq!(w.seed(), Some("testseed123"));
        assert_eq!(w.meta().get(META_TYPE), Some("deterministic"));
        assert_eq!(w.validate(), Ok(()));
    }

    #[test]
    fn new_wallet_rejects_empty_coin() {
        let err = Wallet::new("test.wlt", WalletOptions::new().coin("")).unwrap_err();
        assert_eq!(
            err,
            WalletError::InvalidConfig {
                violation: SchemaViolation::CoinMissing
            }
        );
    }

    #[test]
    fn new_wallet_rejects_empty_seed() {
        let err = Wallet::new("test.wlt", WalletOptions::new().seed("")).unwrap_err();
        assert_eq!(
            err,
            WalletError::InvalidConfig {
                violation: SchemaViolation::SeedMissing
            }
        );
    }

    #[test]
    fn new_wallet_rejects_empty_filename() {
        let err = Wallet::new("", WalletOptions::new()).unwrap_err();
        assert_eq!(
            err,
            WalletError::InvalidConfig {
                violation: SchemaViolation::FilenameMissing
            }
        );
    }

    #[test]
    fn mnemonic_option_normalizes_phrase() {
        let phrase = mnemonic::generate_seed_phrase().unwrap();
        let messy = format!("  {}\t", phrase.to_uppercase().replace(' ', "  "));
        let w = Wallet::new("m.wlt", WalletOptions::new().mnemonic(&messy).unwrap()).unwrap();
        assert_eq!(w.seed(), Some(phrase.as_str()));
    }

    #[test]
    fn mnemonic_option_rejects_bad_phrase() {
        let err = WalletOptions::new().mnemonic("not a seed phrase").unwrap_err();
        assert!(matches!(err, WalletError::InvalidMnemonic(_)));
    }

    #[test]
    fn options_debug_hides_seed() {
        let debug = format!("{:?}", WalletOptions::new().seed("secret words"));
        assert!(!debug.contains("secret words"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn add_and_get_entry() {
        let km = Ed25519KeyMaterial;
        let mut w = seeded("a.wlt", "seed");
        let entry = Entry::from_secret_key(&km, SecretKey::from_bytes([1u8; 32]));
        w.add_entry(entry.clone()).unwrap();

        assert_eq!(w.get_entry(&entry.address), Some(&entry));
        assert_eq!(w.get_entry(&Address::from_key_hash([0u8; 20])), None);
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn duplicate_entry_rejected_and_wallet_unchanged() {
        let km = Ed25519KeyMaterial;
        let mut w = seeded("a.wlt", "seed");
        let entry = Entry::from_secret_key(&km, SecretKey::from_bytes([1u8; 32]));
        w.add_entry(entry.clone()).unwrap();
        let before = w.to_record();

        let err = w.add_entry(entry.clone()).unwrap_err();
        assert_eq!(
            err,
            WalletError::DuplicateEntry {
                address: entry.address
            }
        );
        assert_eq!(w.to_record(), before);
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let km = Ed25519KeyMaterial;
        let mut w = seeded("a.wlt", "seed");
        let keys = [[9u8; 32], [3u8; 32], [7u8; 32]];
        let expected: Vec<Address> = keys
            .iter()
            .map(|k| {
                let e = Entry::from_secret_key(&km, SecretKey::from_bytes(*k));
                let addr = e.address;
                w.add_entry(e).unwrap();
                addr
            })
            .collect();
        assert_eq!(w.addresses(), expected);
    }

    #[test]
    fn generate_addresses_deterministic() {
        let km = Ed25519KeyMaterial;
        let mut w1 = seeded("a.wlt", "buddy fossil side modify");
        let mut w2 = seeded("b.wlt", "buddy fossil side modify");
        let a1 = w1.generate_addresses(3, &km).unwrap();
        let a2 = w2.generate_addresses(3, &km).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(w1.last_seed(), w2.last_seed());
        assert_eq!(w1.len(), 3);
        for e in w1.entries() {
            assert_eq!(e.verify(&km), Ok(()));
        }
    }

    #[test]
    fn generate_addresses_continues_from_last_seed() {
        let km = Ed25519KeyMaterial;
        let mut all_at_once = seeded("a.wlt", "seed");
        let mut stepwise = seeded("b.wlt", "seed");

        let expected = all_at_once.generate_addresses(4, &km).unwrap();
        let mut got = stepwise.generate_addresses(1, &km).unwrap();
        got.extend(stepwise.generate_addresses(3, &km).unwrap());

        assert_eq!(got, expected);
        assert_eq!(stepwise.last_seed(), all_at_once.last_seed());
    }

    #[test]
    fn generate_zero_addresses_is_noop() {
        let km = Ed25519KeyMaterial;
        let mut w = seeded("a.wlt", "seed");
        assert!(w.generate_addresses(0, &km).unwrap().is_empty());
        assert_eq!(w.last_seed(), None);
    }

    #[test]
    fn different_seeds_different_addresses() {
        let km = Ed25519KeyMaterial;
        let a = seeded("a.wlt", "seed one").generate_addresses(1, &km).unwrap();
        let b = seeded("b.wlt", "seed two").generate_addresses(1, &km).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn save_and_load_roundtrip_memory() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let path = Path::new("mem.wlt");

        let mut w = Wallet::new("mem.wlt", WalletOptions::new().label("main").seed("seed")).unwrap();
        w.generate_addresses(2, &km).unwrap();
        w.save(&store, path).unwrap();

        let loaded = Wallet::load(&store, &km, path).unwrap();
        assert_eq!(loaded.addresses(), w.addresses());
        assert_eq!(loaded.meta(), w.meta());
        assert_eq!(loaded.entries(), w.entries());
    }

    #[test]
    fn save_and_load_roundtrip_file() {
        let km = Ed25519KeyMaterial;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disk.wlt");

        let mut w = seeded("disk.wlt", "seed");
        let addrs = w.generate_addresses(2, &km).unwrap();
        w.save(&FileStore, &path).unwrap();

        let loaded = Wallet::load(&FileStore, &km, &path).unwrap();
        assert_eq!(loaded.addresses(), addrs);
        assert!(loaded.get_entry(&addrs[1]).is_some());
    }

    #[test]
    fn load_fixture_without_entries() {
        let km = Ed25519KeyMaterial;
        let w = Wallet::load(&FileStore, &km, &testdata("test1.wlt")).unwrap();
        assert_eq!(w.coin(), Some("cinder"));
        assert_eq!(w.filename(), Some("test1.wlt"));
        assert_eq!(w.label(), Some("test3"));
        assert_eq!(
            w.last_seed(),
            Some("9182b02c0004217ba9a55593f8cf0abecc30d041e094b266dbb5103e1919adaf")
        );
        assert_eq!(
            w.seed(),
            Some("buddy fossil side modify turtle door label grunt baby worth brush master")
        );
        assert_eq!(w.meta().get(META_TM), Some("1503458909"));
        assert_eq!(w.version(), Some("0.1"));
        assert_eq!(w.created_at().unwrap().timestamp(), 1_503_458_909);
        assert!(w.is_empty());
    }

    #[test]
    fn load_missing_file() {
        let km = Ed25519KeyMaterial;
        let err = Wallet::load(&FileStore, &km, Path::new("not_exist_file.wlt")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "load wallet file failed, wallet not_exist_file.wlt doesn't exist"
        );
    }

    #[test]
    fn load_invalid_fixtures() {
        let km = Ed25519KeyMaterial;
        let cases = [
            ("no_type.wlt", SchemaViolation::TypeMissing, "invalid wallet no_type.wlt: type field not set"),
            ("err_type.wlt", SchemaViolation::TypeInvalid, "invalid wallet err_type.wlt: wallet type invalid"),
            ("no_coin.wlt", SchemaViolation::CoinMissing, "invalid wallet no_coin.wlt: coin field not set"),
            ("no_seed.wlt", SchemaViolation::SeedMissing, "invalid wallet no_seed.wlt: seed field not set"),
        ];
        for (file, violation, message) in cases {
            let path = testdata("invalid_wallets").join(file);
            let err = Wallet::load(&FileStore, &km, &path).unwrap_err();
            assert_eq!(
                err,
                WalletError::InvalidSchema {
                    wallet: file.to_string(),
                    violation,
                },
                "{file}"
            );
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn load_fills_missing_filename() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let mut record = seeded("x.wlt", "seed").to_record();
        record.meta = record
            .meta
            .iter()
            .filter(|(k, _)| *k != META_FILENAME)
            .collect();
        store.write_wallet(Path::new("dir/renamed.wlt"), &record).unwrap();

        let w = Wallet::load(&store, &km, Path::new("dir/renamed.wlt")).unwrap();
        assert_eq!(w.filename(), Some("renamed.wlt"));
    }

    #[test]
    fn load_bad_address_is_decode_error() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let mut w = seeded("x.wlt", "seed");
        w.generate_addresses(1, &km).unwrap();
        let mut record = w.to_record();
        record.entries[0].address = "0OIl".into();
        store.write_wallet(Path::new("x.wlt"), &record).unwrap();

        let err = Wallet::load(&store, &km, Path::new("x.wlt")).unwrap_err();
        assert!(matches!(err, WalletError::Decode(_)));
    }

    #[test]
    fn load_rejects_entry_with_foreign_secret() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let mut w = seeded("x.wlt", "seed");
        w.generate_addresses(1, &km).unwrap();
        let mut record = w.to_record();
        record.entries[0].secret_key = SecretKey::from_bytes([7u8; 32]).to_hex();
        store.write_wallet(Path::new("x.wlt"), &record).unwrap();

        let err = Wallet::load(&store, &km, Path::new("x.wlt")).unwrap_err();
        assert_eq!(err, WalletError::Crypto(CryptoError::PublicKeyMismatch));
    }

    #[test]
    fn load_rejects_entry_with_foreign_address() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let mut w = seeded("x.wlt", "seed");
        w.generate_addresses(1, &km).unwrap();
        let mut record = w.to_record();
        record.entries[0].address = Address::from_key_hash([3u8; 20]).encode();
        store.write_wallet(Path::new("x.wlt"), &record).unwrap();

        let err = Wallet::load(&store, &km, Path::new("x.wlt")).unwrap_err();
        assert_eq!(err, WalletError::Crypto(CryptoError::AddressMismatch));
    }

    #[test]
    fn load_duplicate_entries_rejected() {
        let km = Ed25519KeyMaterial;
        let store = MemoryStore::new();
        let mut w = seeded("x.wlt", "seed");
        w.generate_addresses(1, &km).unwrap();
        let mut record = w.to_record();
        record.entries.push(record.entries[0].clone());
        store.write_wallet(Path::new("x.wlt"), &record).unwrap();

        let err = Wallet::load(&store, &km, Path::new("x.wlt")).unwrap_err();
        assert!(matches!(err, WalletError::DuplicateEntry { .. }));
    }

    #[test]
    fn validate_is_idempotent() {
        let w = seeded("a.wlt", "seed");
        let before = w.to_record();
        assert_eq!(w.validate(), Ok(()));
        assert_eq!(w.validate(), Ok(()));
        assert_eq!(w.to_record(), before);
    }

    #[test]
    fn debug_hides_seed() {
        let w = seeded("a.wlt", "very secret seed");
        let debug = format!("{w:?}");
        assert!(debug.contains("Wallet"));
        assert!(debug.contains("a.wlt"));
        assert!(!debug.contains("very secret seed"));
    }
}
