use crate::algorithm::HS256;
use crate::error::{Error, Result, Segment};
use serde::Serialize;
use serde_json::{Map, Value};

/// JWT header structure
///
/// Fields are declared in serialization order, so an issued header is always
/// the byte string `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type
    #[serde(rename = "typ")]
    pub token_type: String,
}

impl TokenHeader {
    /// The only accepted `typ` value
    pub const TOKEN_TYPE: &'static str = "JWT";

    /// Header written into every issued token
    pub fn hs256() -> Self {
        Self {
            algorithm: HS256::NAME.to_string(),
            token_type: Self::TOKEN_TYPE.to_string(),
        }
    }

    /// Parse decoded header bytes
    ///
    /// The header must be a JSON object. Unknown fields are ignored. A missing
    /// `alg` or `typ` reads as an empty string and is later rejected by
    /// [`TokenHeader::ensure_supported`]; a present but non-string value is an
    /// encoding error.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let fields: Map<String, Value> =
            serde_json::from_slice(bytes).map_err(|e| Error::encoding(Segment::Header, e))?;

        Ok(Self {
            algorithm: string_field(&fields, "alg")?,
            token_type: string_field(&fields, "typ")?,
        })
    }

    /// Reject any header other than `typ: JWT, alg: HS256`
    ///
    /// The type is checked before the algorithm. Both comparisons are exact
    /// and case-sensitive.
    pub fn ensure_supported(&self) -> Result<()> {
        if self.token_type != Self::TOKEN_TYPE {
            return Err(Error::UnsupportedType(self.token_type.clone()));
        }
        if self.algorithm != HS256::NAME {
            return Err(Error::UnsupportedAlgorithm(self.algorithm.clone()));
        }
        Ok(())
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String> {
    match fields.get(name) {
        None => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(Error::encoding(
            Segment::Header,
            format!("field '{name}' must be a string, found {other}"),
        )),
    }
}
