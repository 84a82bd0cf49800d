//! Serde codec for date/time fields.
//!
//! The API emits timestamps as `2016-01-30T23:55:00+00:00`. Fractional seconds
//! and a `Z` suffix are accepted on input as well; a fraction is kept when the
//! value is written back. Anything else fails
//! deserialization so a malformed value surfaces as a decode error instead of
//! an absent field.
//!
//! Use with `#[serde(with = "hcloud_core::timestamp")]` on `DateTime<FixedOffset>`
//! fields, or `hcloud_core::timestamp::option` on `Option<DateTime<FixedOffset>>`.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for timestamps.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Alias used by every timestamp field.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse a wire timestamp.
///
/// # Errors
///
/// Returns the chrono parse error when the input matches neither the wire
/// format nor RFC 3339.
pub fn parse(input: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_str(input, FORMAT).or_else(|_| DateTime::parse_from_rfc3339(input))
}

/// Render a timestamp in the wire format.
///
/// Whole seconds render exactly as [`FORMAT`]; sub-second precision is
/// written as a millisecond, microsecond or nanosecond fraction.
#[must_use]
pub fn format(value: &Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Serialize a timestamp in the wire format.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// Deserialize a timestamp from the wire format.
///
/// # Errors
///
/// Fails when the string is not a valid timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
}

/// Codec for optional timestamps; `null` and absent fields map to `None`.
pub mod option {
    use super::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an optional timestamp.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp.
    ///
    /// # Errors
    ///
    /// Fails when a present string is not a valid timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw).map(Some).map_err(|err| {
                serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}"))
            }),
            None => Ok(None),
        }
    }
}
