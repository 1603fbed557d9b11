//! Error types for token issuing, decoding and claim validation
//!
//! Decoding and encoding failures are reported through [`Error`]. A signature
//! mismatch is not an error: it surfaces as a `false` verification result so
//! callers can tell "structurally broken or unsupported" apart from
//! "well-formed but untrusted".
//!
//! Temporal claim failures from
//! [`ClaimsValidation::validate`](crate::ClaimsValidation::validate) are
//! reported through [`ClaimError`].

use std::fmt;
use thiserror::Error;

/// One of the three `.`-separated token segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// First segment, the JOSE header
    Header,
    /// Second segment, the claim set
    Claims,
    /// Third segment, the HMAC tag
    Signature,
}

impl Segment {
    /// Lowercase segment name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Claims => "claims",
            Segment::Signature => "signature",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while creating or decoding a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid token format: expected three parts separated by '.'")]
    MalformedToken,

    #[error("Failed to decode {segment} segment: {reason}")]
    Encoding { segment: Segment, reason: String },

    #[error("Unsupported type: {0:?}")]
    UnsupportedType(String),

    #[error("Unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("Failed to serialize claims: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn encoding(segment: Segment, reason: impl fmt::Display) -> Self {
        Error::Encoding {
            segment,
            reason: reason.to_string(),
        }
    }

    /// Segment that failed to decode, if this is an encoding error
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Error::Encoding { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

/// Temporal claim validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    Expired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    NotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, skew: {skew}s)")]
    IssuedInFuture { issued_at: i64, now: i64, skew: u64 },

    /// The claim is present but is not a number representable as epoch seconds
    #[error("Claim '{claim}' is not a valid numeric date")]
    InvalidNumericDate { claim: String },
}

/// Result type alias for token operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_names_segment() {
        let err = Error::encoding(Segment::Claims, "invalid byte 33, offset 0");
        assert_eq!(err.segment(), Some(Segment::Claims));
        assert_eq!(
            err.to_string(),
            "Failed to decode claims segment: invalid byte 33, offset 0"
        );
    }

    #[test]
    fn test_unsupported_header_messages_carry_value() {
        assert_eq!(
            Error::UnsupportedType("JwT".into()).to_string(),
            r#"Unsupported type: "JwT""#
        );
        assert_eq!(
            Error::UnsupportedAlgorithm("RS256".into()).to_string(),
            r#"Unsupported algorithm: "RS256""#
        );
        assert_eq!(Error::MalformedToken.segment(), None);
    }

    #[test]
    fn test_claim_error_display() {
        let err = ClaimError::Expired {
            expired_at: 100,
            now: 200,
            skew: 0,
        };
        assert_eq!(err.to_string(), "Token expired at 100 (now: 200, skew: 0s)");
    }
}
