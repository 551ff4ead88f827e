use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A field value that is displayed verbatim.
///
/// Integers and decimals stay distinct so that `200` prints as `200` and
/// `200.0` prints as `200.0`, matching what the API sent. Integers cover the
/// whole signed and unsigned 64-bit range.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i128),
    Decimal(f64),
    Flag(bool),
}

impl Scalar {
    /// Converts a JSON scalar. Arrays, objects and `null` have no scalar form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Flag(*b)),
            Value::Number(n) => match n.as_i64().map(i128::from) {
                Some(i) => Some(Scalar::Integer(i)),
                None => match n.as_u64() {
                    Some(u) => Some(Scalar::Integer(u.into())),
                    None => n.as_f64().map(Scalar::Decimal),
                },
            },
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(i) => Some(*i as f64),
            Scalar::Decimal(d) => Some(*d),
            Scalar::Text(_) | Scalar::Flag(_) => None,
        }
    }

    /// Zero, `false` and empty text count as "not set".
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Integer(i) => *i != 0,
            Scalar::Decimal(d) => *d != 0.0,
            Scalar::Flag(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Decimal(d) => fmt_decimal(*d, f),
            Scalar::Flag(true) => f.write_str("True"),
            Scalar::Flag(false) => f.write_str("False"),
        }
    }
}

/// Shortest round-trip digits. Positional from 1e-4 up to 1e16, where whole
/// values keep one fractional digit; scientific with a signed two-digit
/// exponent outside that range (`1e-05`, `1e+16`).
fn fmt_decimal(d: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !d.is_finite() {
        return write!(f, "{d}");
    }
    if d != 0.0 && !(1e-4..1e16).contains(&d.abs()) {
        let sci = format!("{d:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
    if d.fract() == 0.0 {
        write!(f, "{d:.1}")
    } else {
        write!(f, "{d}")
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = Value::deserialize(deserializer)?;
        Scalar::from_json(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "expected string, number or boolean, got {}",
                crate::json_type_name(&value)
            ))
        })
    }
}
