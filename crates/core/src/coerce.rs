//! Lenient deserializers for submitted inquiry fields.
//!
//! The public form posts `application/x-www-form-urlencoded` bodies, where
//! every value arrives as text, while API clients send JSON numbers. These
//! helpers accept both. Use them with `#[serde(default, deserialize_with = ...)]`
//! so that absent fields become `None`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Accept a JSON number or a numeric string. Blank strings and `null` become `None`.
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Lenient>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Int(n)) => Ok(Some(n as f64)),
        Some(Lenient::Float(f)) => Ok(Some(f)),
        Some(Lenient::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a number, got {s:?}")))
        }
        Some(Lenient::Bool(b)) => Err(D::Error::custom(format!("expected a number, got {b}"))),
    }
}

/// Accept a whole JSON number or an integer string. Blank strings and `null` become `None`.
pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Lenient>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer {n} is out of range"))),
        Some(Lenient::Float(f)) => whole_i32(f)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {f}"))),
        Some(Lenient::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}")))
        }
        Some(Lenient::Bool(b)) => Err(D::Error::custom(format!("expected an integer, got {b}"))),
    }
}

/// Accept a string, or a number/bool rendered as text. `null` becomes `None`.
///
/// Strings are kept verbatim, including empty ones.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        None => None,
        Some(Lenient::Text(s)) => Some(s),
        Some(Lenient::Int(n)) => Some(n.to_string()),
        Some(Lenient::Float(f)) => Some(f.to_string()),
        Some(Lenient::Bool(b)) => Some(b.to_string()),
    })
}

fn whole_i32(f: f64) -> Option<i32> {
    if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Some(f as i32)
    } else {
        None
    }
}
