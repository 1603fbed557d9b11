//! Claims validation performance benchmarks
//!
//! Benchmarks the temporal checks (exp, nbf, iat) on their own and through
//! the configurable validator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hs256_jwt::*;

/// Helper to build claim sets relative to a fixed clock
mod helpers {
    use hs256_jwt::ClaimSet;
    use serde_json::{json, Value};

    pub const NOW: i64 = 1_700_000_000;

    pub fn claims(value: Value) -> ClaimSet {
        match value {
            Value::Object(map) => map,
            _ => ClaimSet::new(),
        }
    }

    pub fn all_temporal(exp_offset: i64) -> ClaimSet {
        claims(json!({
            "sub": "user123",
            "iat": NOW - 60,
            "nbf": NOW - 60,
            "exp": NOW + exp_offset,
        }))
    }
}

fn bench_temporal_claims(c: &mut Criterion) {
    use helpers::{all_temporal, claims, NOW};

    let mut group = c.benchmark_group("claims_temporal");

    let valid = all_temporal(3600);
    group.bench_function("valid_all_present", |b| {
        b.iter(|| validate_temporal_claims(black_box(&valid), black_box(NOW)));
    });

    let expired = all_temporal(-3600);
    group.bench_function("expired", |b| {
        b.iter(|| validate_temporal_claims(black_box(&expired), black_box(NOW)));
    });

    let empty = ClaimSet::new();
    group.bench_function("no_temporal_claims", |b| {
        b.iter(|| validate_temporal_claims(black_box(&empty), black_box(NOW)));
    });

    let float_exp = claims(serde_json::json!({"exp": (NOW + 3600) as f64 + 0.5}));
    group.bench_function("float_exp", |b| {
        b.iter(|| validate_temporal_claims(black_box(&float_exp), black_box(NOW)));
    });

    group.finish();
}

fn bench_configured_validation(c: &mut Criterion) {
    use helpers::{all_temporal, NOW};

    let mut group = c.benchmark_group("claims_configured");

    let valid = all_temporal(3600);
    let expired = all_temporal(-10);

    let strict = ClaimsValidation::default();
    group.bench_function("strict_valid", |b| {
        b.iter(|| strict.validate(black_box(&valid), black_box(NOW)));
    });

    group.bench_function("strict_expired_error", |b| {
        b.iter(|| strict.validate(black_box(&expired), black_box(NOW)));
    });

    let lenient = ClaimsValidation::default().clock_skew(60);
    group.bench_function("clock_skew_accepts_expired", |b| {
        b.iter(|| lenient.validate(black_box(&expired), black_box(NOW)));
    });

    let exp_only = ClaimsValidation::default()
        .no_nbf_validation()
        .no_iat_validation();
    group.bench_function("exp_only", |b| {
        b.iter(|| exp_only.is_valid(black_box(&valid), black_box(NOW)));
    });

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    use helpers::{all_temporal, NOW};

    let secret = b"test-secret-key";
    let token = create_token(&all_temporal(3600), secret).unwrap();

    let mut group = c.benchmark_group("claims_end_to_end");

    group.bench_function("parse_verify_validate", |b| {
        b.iter(|| {
            let (claims, signature_valid) = parse_token(black_box(&token), secret).unwrap();
            signature_valid && validate_temporal_claims(&claims, NOW)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_temporal_claims,
    bench_configured_validation,
    bench_end_to_end
);
criterion_main!(benches);
