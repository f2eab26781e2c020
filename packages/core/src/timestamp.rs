//! Serde helpers for backend timestamps.
//!
//! The backend emits ISO-8601 timestamps that may or may not carry a zone
//! offset. Naive values are UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a backend timestamp, treating a missing offset as UTC.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn naive_timestamps_are_utc() {
        let dt = parse("2024-03-05T14:07:09.123456").expect("naive timestamp");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 7, 9));
    }

    #[test]
    fn offsets_are_normalized() {
        let dt = parse("2024-03-05T16:00:00+02:00").expect("offset timestamp");
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse("yesterday").is_none());
    }
}
