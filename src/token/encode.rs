use crate::error::{Error, Result};
use crate::token::finite::ensure_finite;
use crate::token::TokenHeader;
use crate::utils::base64url;
use serde::Serialize;
use serde_json::Value;

/// Encode the fixed header and `claims` into their Base64URL segments
///
/// The claims must serialize to a JSON object with only finite numbers.
///
/// # Errors
///
/// [`Error::Serialization`] when `claims` contain a NaN or infinite float,
/// when `serde_json` cannot serialize them, or when they serialize to
/// anything other than an object.
pub fn encode<C>(claims: &C) -> Result<(String, String)>
where
    C: Serialize + ?Sized,
{
    let header_json = serde_json::to_vec(&TokenHeader::hs256())
        .map_err(|e| Error::Serialization(e.to_string()))?;

    ensure_finite(claims).map_err(|e| Error::Serialization(e.to_string()))?;

    let claims_json = match serde_json::to_value(claims) {
        Ok(Value::Object(map)) => {
            serde_json::to_vec(&map).map_err(|e| Error::Serialization(e.to_string()))?
        }
        Ok(other) => {
            return Err(Error::Serialization(format!(
                "claims must serialize to a JSON object, got {}",
                json_kind(&other)
            )))
        }
        Err(e) => return Err(Error::Serialization(e.to_string())),
    };

    Ok((
        base64url::encode_bytes(header_json),
        base64url::encode_bytes(claims_json),
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::ClaimSet;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_encode_header_is_constant() {
        let (header, _) = encode(&ClaimSet::new()).unwrap();
        assert_eq!(header, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn test_encode_claims_sorted() {
        let mut claims = HashMap::new();
        claims.insert("sub", json!("user"));
        claims.insert("admin", json!(true));
        claims.insert("exp", json!(1_700_000_000));

        let (_, segment) = encode(&claims).unwrap();
        let json = base64url::decode_bytes(&segment).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"admin":true,"exp":1700000000,"sub":"user"}"#
        );
    }

    #[test]
    fn test_encode_typed_claims() {
        #[derive(Serialize)]
        struct Session<'a> {
            sub: &'a str,
            exp: i64,
        }

        let (_, segment) = encode(&Session {
            sub: "user",
            exp: 10,
        })
        .unwrap();
        assert_eq!(
            base64url::decode_bytes(&segment).unwrap(),
            br#"{"exp":10,"sub":"user"}"#
        );
    }

    #[test]
    fn test_encode_rejects_non_object() {
        assert!(matches!(
            encode(&json!([1, 2, 3])),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(encode("claims"), Err(Error::Serialization(_))));
        assert!(matches!(encode(&()), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_encode_rejects_non_finite_numbers() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut claims = HashMap::new();
            claims.insert("exp", value);
            assert!(
                matches!(encode(&claims), Err(Error::Serialization(_))),
                "value: {value}"
            );
        }

        #[derive(Serialize)]
        struct Limits {
            rps: f32,
        }
        assert!(matches!(
            encode(&Limits { rps: f32::NAN }),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_encode_rejects_unrepresentable_keys() {
        let mut claims = BTreeMap::new();
        claims.insert(vec![1u8, 2], "value");
        assert!(matches!(encode(&claims), Err(Error::Serialization(_))));
    }
}
