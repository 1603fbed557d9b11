//! Claim sets and temporal claim validation
//!
//! A [`ClaimSet`] is a plain JSON object: claim names map to dynamically typed
//! [`serde_json::Value`]s. The registered time claims `exp`, `nbf` and `iat`
//! carry seconds since the Unix epoch when present; nothing else is reserved.

mod validator;

pub use validator::{
    current_timestamp, validate_temporal_claims, validate_temporal_claims_now, verify_exp,
    verify_iat, verify_nbf, ClaimsValidation,
};

use serde_json::{Map, Value};

/// Claims carried by a token
///
/// Keys serialize in sorted order, which keeps issued tokens deterministic.
pub type ClaimSet = Map<String, Value>;

/// Expiration Time claim name
pub const EXPIRATION: &str = "exp";

/// Not Before claim name
pub const NOT_BEFORE: &str = "nbf";

/// Issued At claim name
pub const ISSUED_AT: &str = "iat";

/// Coerce a claim value to whole seconds since the Unix epoch
///
/// Integers are taken as is when they fit in `i64`. Floats are truncated
/// toward zero when the result fits in `i64`. Any number outside the `i64`
/// range, integer or float, and every non-numeric value yield `None`.
pub fn numeric_date(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(seconds) = number.as_i64() {
        return Some(seconds);
    }
    if number.is_u64() {
        return None;
    }
    // 2^63 is exact as f64; the range is [-2^63, 2^63)
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    number
        .as_f64()
        .filter(|seconds| (-LIMIT..LIMIT).contains(seconds))
        .map(|seconds| seconds as i64)
}
