//! Response timestamps.
//!
//! The backend emits ISO-8601 strings, sometimes with an offset and sometimes
//! naive (implicitly UTC). Everything downstream compares plain epoch
//! milliseconds, so values are normalized once at deserialization time.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Milliseconds in one hour.
pub const HOUR_MS: i64 = 60 * 60 * 1000;
/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Error returned by [`parse_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The input was empty or whitespace.
    #[error("empty timestamp")]
    Empty,
    /// The input is not a recognizable ISO-8601 date-time.
    #[error("invalid timestamp: {0}")]
    Invalid(String),
}

/// A point in time as milliseconds since the Unix epoch (UTC).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Wrap raw epoch milliseconds.
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Epoch milliseconds.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Format as RFC 3339. Out-of-range values fall back to the raw number.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
            .unwrap_or_else(|| self.0.to_string())
    }

    /// Short `YYYY-MM-DD HH:MM` label for list views.
    #[must_use]
    pub fn short_label(self) -> String {
        let rendered = self.to_rfc3339();
        match (rendered.get(0..10), rendered.get(11..16)) {
            (Some(date), Some(clock)) => format!("{date} {clock}"),
            _ => rendered,
        }
    }
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
///
/// Accepts RFC 3339 values (`2024-05-01T12:00:00Z`, `...+02:00`), naive
/// values with optional fractional seconds (`2024-05-01T12:00:00.123456`),
/// and a space in place of the `T` separator.
///
/// # Errors
///
/// Returns [`TimestampError::Empty`] for blank input and
/// [`TimestampError::Invalid`] when no supported layout matches.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty);
    }
    let normalized = if trimmed.as_bytes().get(10) == Some(&b' ') {
        format!("{}T{}", &trimmed[..10], &trimmed[11..])
    } else {
        trimmed.to_owned()
    };

    if let Ok(dt) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Ok(from_offset(dt));
    }
    if let Ok(dt) = OffsetDateTime::parse(&normalized, &Iso8601::DEFAULT) {
        return Ok(from_offset(dt));
    }
    PrimitiveDateTime::parse(&normalized, &Iso8601::DEFAULT)
        .map(|naive| from_offset(naive.assume_utc()))
        .map_err(|_| TimestampError::Invalid(trimmed.to_owned()))
}

fn from_offset(dt: OffsetDateTime) -> Timestamp {
    let ms = dt.unix_timestamp_nanos() / 1_000_000;
    Timestamp(i64::try_from(ms).unwrap_or(i64::MAX))
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 string or epoch milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_timestamp(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Timestamp(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Timestamp)
            .map_err(|_| E::custom(format!("timestamp {v} out of range")))
    }
}
