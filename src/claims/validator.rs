use super::{numeric_date, ClaimSet, EXPIRATION, ISSUED_AT, NOT_BEFORE};
use crate::error::ClaimError;
use crate::utils::bounds::apply_clock_skew;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for temporal claims validation
///
/// The default checks `exp`, `nbf` and `iat` with no clock skew, which is the
/// behaviour of [`validate_temporal_claims`]. Absent claims always pass; a
/// present claim that is not a numeric date always fails.
///
/// ```
/// use hs256_jwt::ClaimsValidation;
/// use serde_json::json;
///
/// let claims = json!({"exp": 1_000}).as_object().cloned().unwrap();
///
/// assert!(ClaimsValidation::default().validate(&claims, 1_030).is_err());
/// assert!(ClaimsValidation::default().clock_skew(60).validate(&claims, 1_030).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    validate_iat: bool,
    clock_skew_seconds: u64,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
            clock_skew_seconds: 0,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance applied to every temporal check
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Disable issued-at validation
    pub fn no_iat_validation(mut self) -> Self {
        self.validate_iat = false;
        self
    }

    /// Validate `exp`, then `nbf`, then `iat` against `now`
    ///
    /// Returns the first failure.
    pub fn validate(&self, claims: &ClaimSet, now: i64) -> Result<(), ClaimError> {
        let skew = self.clock_skew_seconds;

        if self.validate_exp {
            if let Some(exp) = claim_seconds(claims, EXPIRATION)? {
                if now > apply_clock_skew(exp, skew, true) {
                    return Err(ClaimError::Expired {
                        expired_at: exp,
                        now,
                        skew,
                    });
                }
            }
        }

        if self.validate_nbf {
            if let Some(nbf) = claim_seconds(claims, NOT_BEFORE)? {
                if now < apply_clock_skew(nbf, skew, false) {
                    return Err(ClaimError::NotYetValid {
                        not_before: nbf,
                        now,
                        skew,
                    });
                }
            }
        }

        if self.validate_iat {
            if let Some(iat) = claim_seconds(claims, ISSUED_AT)? {
                if now < apply_clock_skew(iat, skew, false) {
                    return Err(ClaimError::IssuedInFuture {
                        issued_at: iat,
                        now,
                        skew,
                    });
                }
            }
        }

        Ok(())
    }

    /// Same as [`ClaimsValidation::validate`], reporting only pass or fail
    pub fn is_valid(&self, claims: &ClaimSet, now: i64) -> bool {
        self.validate(claims, now).is_ok()
    }
}

/// Read a claim as a numeric date; absent is `None`, present but unusable is an error
fn claim_seconds(claims: &ClaimSet, name: &str) -> Result<Option<i64>, ClaimError> {
    match claims.get(name) {
        None => Ok(None),
        Some(value) => numeric_date(value)
            .map(Some)
            .ok_or_else(|| ClaimError::InvalidNumericDate { claim: name.into() }),
    }
}

/// Check the `exp`, `nbf` and `iat` claims against an explicit `now`
///
/// Each claim is optional. `exp` passes when `now <= exp`, `nbf` and `iat`
/// pass when `now >= value`. A claim that is present but not numeric fails.
pub fn validate_temporal_claims(claims: &ClaimSet, now: i64) -> bool {
    ClaimsValidation::default().is_valid(claims, now)
}

/// [`validate_temporal_claims`] against the system clock
pub fn validate_temporal_claims_now(claims: &ClaimSet) -> bool {
    validate_temporal_claims(claims, current_timestamp())
}

/// Check a single `exp` claim value: valid while `now <= exp`
pub fn verify_exp(exp: &Value, now: i64) -> bool {
    numeric_date(exp).is_some_and(|exp| now <= exp)
}

/// Check a single `nbf` claim value: valid once `now >= nbf`
pub fn verify_nbf(nbf: &Value, now: i64) -> bool {
    numeric_date(nbf).is_some_and(|nbf| now >= nbf)
}

/// Check a single `iat` claim value: valid once `now >= iat`
pub fn verify_iat(iat: &Value, now: i64) -> bool {
    numeric_date(iat).is_some_and(|iat| now >= iat)
}

/// Get current Unix timestamp
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
