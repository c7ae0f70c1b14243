//! Tolerant timestamp decoding for externally-sourced event data.
//!
//! Timestamps arrive from an unreliable generator (the AI parsing service),
//! so decoding tries a fallback chain of formats instead of a single strict
//! parse. ISO-8601 with an explicit numeric offset is the preferred form
//! since it preserves local-time intent from the event's origin timezone.
//!
//! Known approximation: a bare local date-time with no offset is read as
//! UTC. Producers are instructed to always emit offsets; this branch only
//! catches the ones that ignore that instruction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DecodeError;

/// Parse a timestamp string of unknown but bounded format.
///
/// Formats are tried in order:
/// 1. ISO-8601 with explicit numeric offset (`2026-01-20T14:30:00+09:00`)
/// 2. ISO-8601 with literal `Z` suffix
/// 3. ISO-8601 with fractional seconds and offset or `Z`
/// 4. Bare local date-time, read as UTC
/// 5. Bare calendar date (`YYYY-MM-DD`), read as midnight UTC
///
/// # Errors
/// Returns [`DecodeError::InvalidTimestamp`] when no format matches. The
/// raw string is logged at warn level; callers must surface the failure
/// rather than defaulting to "now".
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DecodeError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ") {
        return Ok(ndt.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return Ok(ndt.and_utc());
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(ndt.and_utc());
        }
    }

    log::warn!("timestamp matched no supported format: {raw:?}");
    Err(DecodeError::InvalidTimestamp(raw.to_string()))
}

/// Encode an instant in the preferred wire form (format 1, UTC offset).
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Serde adapter for required timestamp fields carried as strings.
pub mod ts {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional timestamp fields carried as strings.
pub mod ts_opt {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => ser.serialize_some(&super::format_timestamp(dt)),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        match raw {
            Some(s) => super::parse_timestamp(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
