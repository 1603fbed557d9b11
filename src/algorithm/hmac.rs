use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HS256 algorithm (HMAC with SHA-256)
///
/// The signed message is the Base64URL text of the header and claims segments
/// joined by a literal `.`, never the decoded payload. Changing a single
/// character of either encoded segment invalidates the signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HS256;

impl HS256 {
    /// Value of the `alg` header field
    pub const NAME: &'static str = "HS256";

    /// Length of an HMAC-SHA256 tag in bytes
    pub const SIGNATURE_LEN: usize = 32;

    /// Compute the HMAC-SHA256 tag over `header_segment.claims_segment`
    pub fn sign(
        &self,
        header_segment: &str,
        claims_segment: &str,
        key: &[u8],
    ) -> [u8; 32] {
        // HMAC pads or hashes keys of any length
        let mut mac = HmacSha256::new_from_slice(key)
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
        mac.update(header_segment.as_bytes());
        mac.update(b".");
        mac.update(claims_segment.as_bytes());
        let mut signature = [0u8; 32];
        signature.copy_from_slice(&mac.finalize().into_bytes());
        signature
    }

    /// Check a provided tag against the expected one with constant-time comparison
    ///
    /// A wrong length or any mismatching byte returns `false`.
    pub fn verify(
        &self,
        header_segment: &str,
        claims_segment: &str,
        signature: &[u8],
        key: &[u8],
    ) -> bool {
        let expected_signature = self.sign(header_segment, claims_segment, key);

        if signature.len() != expected_signature.len() {
            return false;
        }

        constant_time_eq(signature, &expected_signature)
    }
}
