//! Tolerant deserializers for values the server may emit either as JSON
//! numbers or as strings (primary keys, `Decimal` amounts).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_id(self) -> String {
        match self {
            Scalar::Int(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Text(s) => s.trim().to_string(),
        }
    }

    fn into_amount_text(self) -> String {
        match self {
            Scalar::Int(v) => format!("{}.00", v),
            Scalar::Float(v) => format!("{:.2}", v),
            Scalar::Text(s) => s.trim().to_string(),
        }
    }
}

/// Identifier as string: `42` and `"42"` both become `"42"`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_id)
}

/// Optional identifier; `null`, missing and blank strings become `None`.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.map(Scalar::into_id).filter(|id| !id.is_empty()))
}

/// Monetary amount kept as display text (`"12.00"`), accepting numbers too.
pub fn deserialize_opt_amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.map(Scalar::into_amount_text).filter(|s| !s.is_empty()))
}

/// Monetary amount as a number. Django serializes `Decimal` as a string.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(v) => Ok(v as f64),
        Scalar::Float(v) => Ok(v),
        Scalar::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount {:?}: {}", s, e))),
    }
}

/// String that may arrive as `null`.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
