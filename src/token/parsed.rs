use crate::algorithm::HS256;
use crate::claims::ClaimSet;
use crate::error::{Error, Result, Segment};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// A token that has been decoded but whose signature has not been checked
///
/// Decoding succeeds for any structurally sound HS256 token regardless of the
/// key it was signed with. The original header and claims segment text is
/// kept byte-for-byte, because the signature covers that text and not the
/// decoded JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedToken {
    header: TokenHeader,
    header_b64: String,
    claims_b64: String,
    signature: Vec<u8>,
    claims: ClaimSet,
}

impl ParsedToken {
    /// Decode a token string in the format `header.claims.signature`
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedToken`] unless there are exactly three parts
    /// - [`Error::Encoding`] naming the first segment that is not valid
    ///   Base64URL, or whose JSON is not an object
    /// - [`Error::UnsupportedType`] / [`Error::UnsupportedAlgorithm`] for any
    ///   header other than `typ: JWT, alg: HS256`
    pub fn from_string(token: &str) -> Result<Self> {
        let mut parts = token.split('.');
        let (header_b64, claims_b64, signature_b64) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(header), Some(claims), Some(signature), None) => (header, claims, signature),
                _ => return Err(Error::MalformedToken),
            };

        tracing::debug!(
            header = header_b64.len(),
            claims = claims_b64.len(),
            signature = signature_b64.len(),
            "decoding token segments"
        );

        let header_json = base64url::decode_segment(header_b64, Segment::Header)?;
        let claims_json = base64url::decode_segment(claims_b64, Segment::Claims)?;
        let signature = base64url::decode_segment(signature_b64, Segment::Signature)?;

        let header = TokenHeader::from_json(&header_json)?;
        if let Err(e) = header.ensure_supported() {
            tracing::warn!(
                typ = %header.token_type,
                alg = %header.algorithm,
                "rejecting token with unsupported header"
            );
            return Err(e);
        }

        let claims: ClaimSet = serde_json::from_slice(&claims_json)
            .map_err(|e| Error::encoding(Segment::Claims, e))?;

        Ok(Self {
            header,
            header_b64: header_b64.to_string(),
            claims_b64: claims_b64.to_string(),
            signature,
            claims,
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the decoded claims
    ///
    /// Do not trust these until [`ParsedToken::verify`] returns `true`.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Take ownership of the decoded claims
    pub fn into_claims(self) -> ClaimSet {
        self.claims
    }

    /// Header segment exactly as it appeared in the token
    pub fn header_segment(&self) -> &str {
        &self.header_b64
    }

    /// Claims segment exactly as it appeared in the token
    pub fn claims_segment(&self) -> &str {
        &self.claims_b64
    }

    /// Decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Get the signing input (header.claims)
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.claims_b64)
    }

    /// Check the signature with `key`
    pub fn verify(&self, key: &[u8]) -> bool {
        HS256.verify(&self.header_b64, &self.claims_b64, &self.signature, key)
    }
}
