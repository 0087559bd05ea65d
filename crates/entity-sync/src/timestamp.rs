//! Timestamp Codec
//!
//! The single place where timestamps cross between their wire text, their
//! form text and `DateTime<Utc>`. Wire text is RFC 3339 in UTC with
//! millisecond precision (`2025-07-11T04:40:00.000Z`). Form and detail text
//! is wall-clock time in a `DisplayZone`, the browser's local zone by default.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};

use crate::error::TimestampError;

/// Layout used by `datetime-local` form inputs
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATE_TIME_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Canonical wire text of a present timestamp
pub fn to_wire(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Absent stays absent; it is sent as an explicit `null`
pub fn encode(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(to_wire)
}

/// Absent, `null` or blank text decodes to `None`, never to "now"
pub fn decode(value: Option<&str>) -> Result<Option<DateTime<Utc>>, TimestampError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| Some(parsed.with_timezone(&Utc)))
            .map_err(|e| TimestampError::new(raw, e.to_string())),
    }
}

/// Wall clock that form inputs and detail pages are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }

    /// Formats `value` as wall-clock text with a chrono `layout`
    pub fn format(&self, value: &DateTime<Utc>, layout: &str) -> String {
        match self {
            DisplayZone::Local => value.with_timezone(&Local).format(layout).to_string(),
            DisplayZone::Fixed(offset) => value.with_timezone(offset).format(layout).to_string(),
        }
    }

    pub fn to_form(&self, value: &DateTime<Utc>) -> String {
        self.format(value, DATE_TIME_FORMAT)
    }

    /// Parses `datetime-local` text, with or without seconds. A local time
    /// skipped by a DST change is an error; a repeated one takes the earlier.
    pub fn from_form(&self, value: &str) -> Result<Option<DateTime<Utc>>, TimestampError> {
        let raw = value.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let naive = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, DATE_TIME_SECONDS_FORMAT))
            .map_err(|e| TimestampError::new(raw, e.to_string()))?;
        let resolved = match self {
            DisplayZone::Local => {
                Local.from_local_datetime(&naive).earliest().map(|t| t.with_timezone(&Utc))
            }
            DisplayZone::Fixed(offset) => {
                offset.from_local_datetime(&naive).earliest().map(|t| t.with_timezone(&Utc))
            }
        };
        resolved
            .map(Some)
            .ok_or_else(|| TimestampError::new(raw, "local time does not exist"))
    }
}

/// Form text in the local zone
pub fn to_form(value: &DateTime<Utc>) -> String {
    DisplayZone::Local.to_form(value)
}

/// Form text read in the local zone
pub fn from_form(value: &str) -> Result<Option<DateTime<Utc>>, TimestampError> {
    DisplayZone::Local.from_form(value)
}

/// Serde adapter for `Option<DateTime<Utc>>` entity fields.
///
/// Use with `#[serde(default, with = "entity_sync::timestamp::option")]`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match super::encode(value.as_ref()) {
            Some(text) => serializer.serialize_some(&text),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        super::decode(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}
