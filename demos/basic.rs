//! Basic example: issue a token, verify it, check its time window
//!
//! 1. Build a claim set and sign it with `create_token`
//! 2. Decode and verify it with `parse_token`
//! 3. Check `exp`/`nbf`/`iat`, first with the defaults, then with clock skew
//! 4. Show that a token signed with another key decodes but does not verify
//!
//! Run with `RUST_LOG=hs256_jwt=debug` to see the decoder's trace output.

use hs256_jwt::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    role: String,
    iat: i64,
    nbf: i64,
    exp: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hs256_jwt=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== hs256-jwt - Basic Example ===\n");

    let key = b"your-256-bit-secret-key-here!";
    let now = current_timestamp();

    // Step 1: Issue
    let session = SessionClaims {
        sub: "user-42".into(),
        role: "admin".into(),
        iat: now,
        nbf: now,
        exp: now + 3600,
    };
    let token = create_token(&session, key)?;
    println!("Token: {token}\n");

    // Step 2: Decode and verify
    let (claims, signature_valid) = parse_token(&token, key)?;
    println!("Signature valid: {signature_valid}");
    println!("Claims: {}\n", serde_json::Value::Object(claims.clone()));

    // Step 3: Temporal claims
    println!("Valid now: {}", validate_temporal_claims(&claims, now));
    println!(
        "Valid in two hours: {}",
        validate_temporal_claims(&claims, now + 7200)
    );

    let lenient = ClaimsValidation::default().clock_skew(60);
    match lenient.validate(&claims, now + 3630) {
        Ok(()) => println!("Valid 30s after expiry with 60s skew: true"),
        Err(e) => println!("Rejected with 60s skew: {e}"),
    }
    if let Err(e) = ClaimsValidation::default().validate(&claims, now + 3630) {
        println!("Rejected without skew: {e}\n");
    }

    // Typed access
    let (typed, _) = parse_token_as::<SessionClaims>(&token, key)?;
    println!("Subject: {}, role: {}\n", typed.sub, typed.role);

    // Step 4: Wrong key
    let (claims, signature_valid) = parse_token(&token, b"some-other-key")?;
    println!("With the wrong key, signature valid: {signature_valid}");
    println!("Claims are still readable (but untrusted): sub = {}", claims["sub"]);

    Ok(())
}
