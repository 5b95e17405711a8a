//! Lenient numeric deserializers for backend payloads.
//!
//! Decimal columns arrive either as JSON numbers or as strings (`"12.50"`),
//! depending on the serializer the endpoint uses.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a dollar amount into integer cents. At most two fraction digits.
pub(crate) fn parse_cents(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return None;
    }
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if fraction.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(fraction)
}

pub(crate) fn deserialize_cents<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return int.checked_mul(100).ok_or_else(|| D::Error::custom("price out of range"));
            }
            let Some(float) = number.as_f64() else {
                return Err(D::Error::custom("expected price"));
            };
            parse_cents(&format!("{float:.2}")).ok_or_else(|| D::Error::custom("invalid price"))
        }
        serde_json::Value::String(text) => parse_cents(&text).ok_or_else(|| D::Error::custom(format!("invalid price {text:?}"))),
        _ => Err(D::Error::custom("expected price")),
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize_cents<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_cents(*cents))
}

/// Render integer cents as `12.50`.
pub(crate) fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

pub(crate) fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => Ok(number.as_f64()),
        Some(serde_json::Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number {text:?}"))),
        Some(_) => Err(D::Error::custom("expected number")),
    }
}
