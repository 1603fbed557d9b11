//! Signature algorithm
//!
//! HS256 is the only algorithm. It is never negotiated from the token: the
//! header must name it exactly, and keys are always treated as HMAC secrets.

mod hmac;

pub use self::hmac::HS256;
