//! Criterion benchmarks for cinder-wallet hot paths.
//!
//! Covers: hour distribution, output building, and address generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cinder_core::address::Address;
use cinder_core::constants::COIN;
use cinder_core::crypto::Ed25519KeyMaterial;
use cinder_core::fee::BurnFeePolicy;
use cinder_core::types::UnspentOutput;
use cinder_wallet::builder::OutputBuilder;
use cinder_wallet::hours::HourDistributor;
use cinder_wallet::wallet::{Wallet, WalletOptions};

fn bench_distribute(c: &mut Criterion) {
    let policy = BurnFeePolicy::default();
    let distributor = HourDistributor::new(&policy);

    c.bench_function("distribute_spend_hours_16", |b| {
        b.iter(|| distributor.distribute(black_box(1_000_003), black_box(16), black_box(true)))
    });
}

fn bench_build_outputs(c: &mut Criterion) {
    let policy = BurnFeePolicy::default();
    let inputs: Vec<UnspentOutput> = (0..32u8)
        .map(|i| UnspentOutput::new(Address::from_key_hash([i; 20]), 10 * COIN, 1_000))
        .collect();
    let change = Address::from_key_hash([0xCC; 20]);

    let mut builder = OutputBuilder::new(&policy);
    for i in 0..8u8 {
        builder.add_destination(Address::from_key_hash([0xA0 + i; 20]), 3 * COIN);
    }

    c.bench_function("build_outputs_32_in_8_out", |b| {
        b.iter(|| builder.build(black_box(&inputs), black_box(&change)))
    });
}

fn bench_generate_addresses(c: &mut Criterion) {
    let km = Ed25519KeyMaterial;

    c.bench_function("generate_addresses_10", |b| {
        b.iter(|| {
            let mut w = Wallet::new("bench.wlt", WalletOptions::new().seed("bench seed"))
                .expect("wallet");
            w.generate_addresses(black_box(10), &km)
        })
    });
}

criterion_group!(
    benches,
    bench_distribute,
    bench_build_outputs,
    bench_generate_addresses
);
criterion_main!(benches);
