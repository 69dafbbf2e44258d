//! Derivation benchmarks
//!
//! The standard profile dominates on Argon2id's 64 MiB fill; the low-cost
//! profile isolates the hashing and bookkeeping around it.

use criterion::{criterion_group, criterion_main, Criterion};
use lockkey::{build_input_material, build_salt, Deriver, KdfConfig};

fn benchmark_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    group.sample_size(10);

    let standard = Deriver::new();
    group.bench_function("standard_profile", |b| {
        b.iter(|| {
            let record = standard
                .derive(b"user@example.com", b"hello, world!")
                .expect("standard derivation should succeed");
            std::hint::black_box(record);
        });
    });

    let low_cost = Deriver::new().with_config(KdfConfig::low_cost());
    group.bench_function("low_cost_profile", |b| {
        b.iter(|| {
            let record = low_cost
                .derive(b"user@example.com", b"hello, world!")
                .expect("low-cost derivation should succeed");
            std::hint::black_box(record);
        });
    });

    group.finish();
}

fn benchmark_pre_kdf_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pre_kdf");

    group.bench_function("salt", |b| {
        b.iter(|| {
            let salt = build_salt(b"user@example.com", b"hello, world!", 16)
                .expect("salt length is in range");
            std::hint::black_box(salt);
        });
    });

    group.bench_function("input_material", |b| {
        b.iter(|| {
            let material = build_input_material(b"user@example.com", b"hello, world!")
                .expect("HMAC accepts any key");
            std::hint::black_box(material);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_derivation, benchmark_pre_kdf_stages);
criterion_main!(benches);
