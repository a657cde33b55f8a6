//! Shape checks for incoming health check submissions.
//!
//! The same rules run twice: once in the client before a request is sent and
//! once in the service, which stays authoritative.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use record_store::NewHealthCheck;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location of the offending value; empty for the payload itself.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    fn at(field: &str, message: &str) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.to_string(),
        }
    }

    /// Issue attached to the whole payload rather than one field.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Returns the field name, if the issue targets one.
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// Every rule a submission failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Returns the message for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field() == Some(field))
            .map(|issue| issue.message.as_str())
    }

    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }
}

/// Validates an arbitrary payload and normalizes it into a submission.
///
/// `name` and `feeling` must be non-empty strings; `date` must parse as an
/// instant and is normalized to UTC at millisecond precision. All fields are
/// checked so the caller sees every problem at once.
pub fn validate(payload: &Value) -> Result<NewHealthCheck, ValidationErrors> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationErrors::new(vec![ValidationIssue::root(
            "Expected an object",
        )]));
    };

    let mut issues = Vec::new();
    let name = required_text(fields, "name", "Name is required", &mut issues);
    let feeling = required_text(fields, "feeling", "Feeling is required", &mut issues);
    let date = match fields.get("date").and_then(Value::as_str) {
        None => {
            issues.push(ValidationIssue::at("date", "Date is required"));
            None
        }
        Some(raw) => match parse_instant(raw) {
            Some(date) => Some(date),
            None => {
                issues.push(ValidationIssue::at("date", "Invalid date format"));
                None
            }
        },
    };

    match (name, feeling, date) {
        (Some(name), Some(feeling), Some(date)) if issues.is_empty() => {
            Ok(NewHealthCheck::new(name, feeling, date))
        }
        _ => Err(ValidationErrors::new(issues)),
    }
}

fn required_text(
    fields: &Map<String, Value>,
    field: &str,
    message: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match fields.get(field).and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            issues.push(ValidationIssue::at(field, message));
            None
        }
    }
}

const LOCAL_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses the ISO-8601 shapes a browser produces into a UTC instant.
///
/// Accepts RFC 3339 with an offset or `Z`, a local date-time without offset
/// (minutes or seconds precision, read as UTC) and a bare date (UTC
/// midnight). Sub-millisecond digits are truncated.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).trunc_subsecs(3));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    let local = raw.strip_suffix('Z').unwrap_or(raw);
    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(local, format) {
            return Some(naive.and_utc().trunc_subsecs(3));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn valid_payload_is_normalized() {
        let submission = validate(&json!({
            "name": "Ana",
            "feeling": "Good",
            "date": "2024-06-01T09:30",
        }))
        .unwrap();

        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.feeling, "Good");
        assert_eq!(submission.date, utc(2024, 6, 1, 9, 30, 0));
    }

    #[test]
    fn every_failing_field_is_reported_in_order() {
        let err = validate(&json!({ "name": "", "date": "not a date" })).unwrap_err();

        let fields: Vec<_> = err.issues().iter().filter_map(|i| i.field()).collect();
        assert_eq!(fields, vec!["name", "feeling", "date"]);
        assert_eq!(err.message_for("name"), Some("Name is required"));
        assert_eq!(err.message_for("feeling"), Some("Feeling is required"));
        assert_eq!(err.message_for("date"), Some("Invalid date format"));
    }

    #[test]
    fn missing_date_is_required_not_invalid() {
        let err = validate(&json!({ "name": "Ana", "feeling": "Good" })).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.message_for("date"), Some("Date is required"));
    }

    #[test]
    fn wrong_types_fail_like_missing_fields() {
        let err = validate(&json!({ "name": 7, "feeling": null, "date": 1717234200 })).unwrap_err();
        assert_eq!(err.issues().len(), 3);
        assert_eq!(err.message_for("date"), Some("Date is required"));
    }

    #[test]
    fn non_object_payload_fails_at_root() {
        let err = validate(&json!(["Ana", "Good"])).unwrap_err();
        assert_eq!(err.issues(), &[ValidationIssue::root("Expected an object")]);
        assert_eq!(err.issues()[0].field(), None);
    }

    #[test]
    fn whitespace_and_unknown_feelings_are_accepted() {
        let submission = validate(&json!({
            "name": " ",
            "feeling": "Caffeinated",
            "date": "2024-06-01",
        }))
        .unwrap();
        assert_eq!(submission.name, " ");
        assert_eq!(submission.feeling, "Caffeinated");
    }

    #[test]
    fn display_joins_messages() {
        let err = validate(&json!({ "date": "2024-06-01" })).unwrap_err();
        assert_eq!(err.to_string(), "Name is required; Feeling is required");
    }

    #[test]
    fn parses_browser_date_shapes() {
        let expected = utc(2024, 1, 1, 10, 0, 0);
        assert_eq!(parse_instant("2024-01-01T10:00"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T10:00:00"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T10:00:00.000Z"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T10:00Z"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T12:00+02:00"), Some(expected));
        assert_eq!(parse_instant("2024-01-01"), Some(utc(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn truncates_to_milliseconds() {
        let parsed = parse_instant("2024-01-01T10:00:00.123456789Z").unwrap();
        assert_eq!(common::format_instant(&parsed), "2024-01-01T10:00:00.123Z");
    }

    #[test]
    fn rejects_unparseable_dates() {
        for raw in ["", "yesterday", "2024-13-01T10:00", "2024-02-30", "10:00"] {
            assert_eq!(parse_instant(raw), None, "{raw:?} should not parse");
        }
    }
}
