//! # hs256-jwt - Compact HS256-signed tokens
//!
//! Issue and verify JSON Web Tokens signed with HMAC-SHA256, and check their
//! temporal claims. Everything is a pure function over strings, byte slices
//! and in-memory claim maps: no I/O, no global state, no stored keys.
//!
//! ## Overview
//!
//! A token is three Base64URL segments joined by `.`:
//!
//! ```text
//! base64url({"alg":"HS256","typ":"JWT"}) . base64url(claims) . base64url(HMAC-SHA256(h "." c, key))
//! ```
//!
//! The header is fixed. Decoding accepts only `typ: "JWT"` and `alg: "HS256"`,
//! so there is no algorithm negotiation and no `"none"` algorithm.
//!
//! Claims are signed, not encrypted. Anyone holding the token can read them.
//!
//! ## Quick Start
//!
//! ```
//! use hs256_jwt::{create_token, parse_token, validate_temporal_claims, ClaimSet};
//! use serde_json::json;
//!
//! let key = b"server-side-secret";
//! let now = 1_700_000_000;
//!
//! let mut claims = ClaimSet::new();
//! claims.insert("sub".into(), json!("user-42"));
//! claims.insert("exp".into(), json!(now + 3600));
//!
//! let token = create_token(&claims, key)?;
//!
//! let (decoded, signature_valid) = parse_token(&token, key)?;
//! assert!(signature_valid);
//! assert!(validate_temporal_claims(&decoded, now));
//! assert_eq!(decoded["sub"], "user-42");
//! # Ok::<(), hs256_jwt::Error>(())
//! ```
//!
//! ## Errors and untrusted tokens
//!
//! A token that cannot be decoded (wrong number of parts, bad Base64URL, bad
//! JSON, unsupported header) is an [`Error`]. A token that decodes but carries
//! a wrong signature is **not** an error: [`parse_token`] returns the claims
//! together with `false`, and the caller must reject it.
//!
//! ## Claims Validation
//!
//! [`validate_temporal_claims`] checks `exp`, `nbf` and `iat` against an
//! explicit `now`. [`ClaimsValidation`] adds clock skew, per-claim switches
//! and structured [`ClaimError`]s:
//!
//! ```
//! use hs256_jwt::{ClaimError, ClaimsValidation, ClaimSet};
//! use serde_json::json;
//!
//! let mut claims = ClaimSet::new();
//! claims.insert("nbf".into(), json!(1_000));
//!
//! let config = ClaimsValidation::default().clock_skew(30).no_iat_validation();
//! assert!(config.validate(&claims, 980).is_ok());
//! assert!(matches!(
//!     config.validate(&claims, 900),
//!     Err(ClaimError::NotYetValid { not_before: 1_000, .. })
//! ));
//! ```
//!
//! ## Timing Attack Protection
//!
//! Signature comparison uses the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate after a length check, so the time taken does not depend on where the
//! provided and expected tags differ.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

// Signature
pub mod algorithm;

// Claims and validation
pub mod claims;

// Token encoding and decoding
pub mod token;

pub use algorithm::HS256;
pub use claims::{
    current_timestamp, validate_temporal_claims, validate_temporal_claims_now, ClaimSet,
    ClaimsValidation,
};
pub use error::{ClaimError, Error, Result, Segment};
pub use token::{decode, encode, ParsedToken, TokenHeader};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Create a signed token from `claims`
///
/// Output is deterministic: the same claims and key always produce the same
/// token string.
///
/// # Errors
///
/// [`Error::Serialization`] when the claims cannot be serialized to a JSON
/// object.
pub fn create_token<C>(claims: &C, key: &[u8]) -> Result<String>
where
    C: Serialize + ?Sized,
{
    let (header_b64, claims_b64) = encode(claims)?;
    let signature = HS256.sign(&header_b64, &claims_b64, key);

    Ok(format!(
        "{header_b64}.{claims_b64}.{}",
        utils::encode_bytes(signature)
    ))
}

/// Decode a token and check its signature with `key`
///
/// Returns the decoded claims and whether the signature is valid. The claims
/// are returned even when the signature is not; they must not be trusted in
/// that case.
///
/// # Errors
///
/// Any structural problem reported by [`ParsedToken::from_string`].
pub fn parse_token(token: &str, key: &[u8]) -> Result<(ClaimSet, bool)> {
    let parsed = ParsedToken::from_string(token)?;
    let signature_valid = parsed.verify(key);
    if !signature_valid {
        tracing::debug!("token signature does not match");
    }
    Ok((parsed.into_claims(), signature_valid))
}

/// [`parse_token`], deserializing the claims into `C`
///
/// # Errors
///
/// As [`parse_token`], plus [`Error::Encoding`] for the claims segment when
/// the claims do not fit `C`.
pub fn parse_token_as<C>(token: &str, key: &[u8]) -> Result<(C, bool)>
where
    C: DeserializeOwned,
{
    let (claims, signature_valid) = parse_token(token, key)?;
    let claims = serde_json::from_value(serde_json::Value::Object(claims))
        .map_err(|e| Error::encoding(Segment::Claims, e))?;
    Ok((claims, signature_valid))
}
