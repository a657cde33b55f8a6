//! Canonical textual form of an instant.
//!
//! Every instant leaving the system is written as UTC with millisecond
//! precision and a `Z` suffix, e.g. `2024-06-01T09:30:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats an instant in canonical form.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `DateTime<Utc>` fields using the canonical form.
///
/// Deserialization accepts any RFC 3339 timestamp and converts it to UTC.
pub mod canonical {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        instant: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_instant(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "canonical")]
        at: DateTime<Utc>,
    }

    #[test]
    fn formats_with_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(format_instant(&at), "2024-01-01T10:00:00.000Z");
    }

    #[test]
    fn deserialize_converts_offsets_to_utc() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"2024-06-01T11:30:00+02:00"}"#).unwrap();
        assert_eq!(w.at, Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
        assert_eq!(
            serde_json::to_string(&w).unwrap(),
            r#"{"at":"2024-06-01T09:30:00.000Z"}"#
        );
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"at":"yesterday"}"#).is_err());
    }
}
