//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate. Encoding never emits padding.
//! Decoding uses the same URL-safe alphabet and accepts segments with or
//! without trailing `=` padding, so tokens from padded encoders still decode.

use crate::error::{Error, Result, Segment};
use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD},
    engine::DecodePaddingMode,
    Engine,
};

const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode one token segment, naming the segment on failure
pub(crate) fn decode_segment(input: &str, segment: Segment) -> Result<Vec<u8>> {
    decode_bytes(input).map_err(|e| Error::encoding(segment, e))
}

/// Decode a Base64URL string to bytes
pub fn decode_bytes(input: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_ANY_PAD.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn test_decode_accepts_optional_padding() {
        assert_eq!(decode_bytes("SGVsbG8").unwrap(), b"Hello");
        assert_eq!(decode_bytes("SGVsbG8=").unwrap(), b"Hello");
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode_bytes([0xfb, 0xff]);
        assert_eq!(encoded, "-_8");
        assert_eq!(decode_bytes("-_8").unwrap(), vec![0xfb, 0xff]);

        // Standard alphabet characters are not part of Base64URL
        assert!(decode_bytes("+/8").is_err());
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!").is_err());
        assert!(decode_bytes("A").is_err());
    }

    #[test]
    fn test_decode_segment_names_segment() {
        let err = decode_segment("!!!", Segment::Signature).unwrap_err();
        assert_eq!(err.segment(), Some(Segment::Signature));
    }
}
