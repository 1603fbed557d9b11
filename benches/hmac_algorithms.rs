//! HS256 signing and verification benchmarks
//!
//! Compares matching and mismatching signatures to confirm the comparison
//! cost does not depend on where the tags differ.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hs256_jwt::*;

fn bench_hmac_sign(c: &mut Criterion) {
    let (header, claims) = encode(&serde_json::json!({"sub": "user123", "iat": 1_516_239_022}))
        .expect("claims serialize");

    let mut group = c.benchmark_group("hmac_sign");
    for key_len in [16, 32, 64, 128] {
        let key = vec![0x5a; key_len];
        group.bench_function(format!("key_{key_len}"), |b| {
            b.iter(|| HS256.sign(black_box(&header), black_box(&claims), black_box(&key)));
        });
    }
    group.finish();
}

fn bench_hmac_verification(c: &mut Criterion) {
    let secret = b"test-secret-key-for-hs256";
    let (header, claims) = encode(&serde_json::json!({"sub": "user123", "iat": 1_516_239_022}))
        .expect("claims serialize");
    let valid = HS256.sign(&header, &claims, secret);

    let mut first_byte_wrong = valid;
    first_byte_wrong[0] ^= 0x01;
    let mut last_byte_wrong = valid;
    last_byte_wrong[HS256::SIGNATURE_LEN - 1] ^= 0x01;

    let mut group = c.benchmark_group("hmac_verification");

    group.bench_function("valid", |b| {
        b.iter(|| HS256.verify(&header, &claims, black_box(&valid), secret));
    });

    group.bench_function("first_byte_wrong", |b| {
        b.iter(|| HS256.verify(&header, &claims, black_box(&first_byte_wrong), secret));
    });

    group.bench_function("last_byte_wrong", |b| {
        b.iter(|| HS256.verify(&header, &claims, black_box(&last_byte_wrong), secret));
    });

    group.bench_function("short_signature", |b| {
        b.iter(|| HS256.verify(&header, &claims, black_box(&valid[..16]), secret));
    });

    group.finish();
}

criterion_group!(benches, bench_hmac_sign, bench_hmac_verification);
criterion_main!(benches);
