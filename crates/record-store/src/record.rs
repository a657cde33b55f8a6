use chrono::{DateTime, Utc};
use common::{RecordId, instant};
use serde::{Deserialize, Serialize};

/// A persisted team health check.
///
/// Instants are serialized in canonical UTC form
/// (`2024-06-01T09:30:00.000Z`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Assigned by the store on insertion.
    pub id: RecordId,

    /// Name of the submitter.
    pub name: String,

    /// Mood label, free text.
    pub feeling: String,

    /// The instant the check refers to.
    #[serde(with = "instant::canonical")]
    pub date: DateTime<Utc>,

    /// When the store accepted the row.
    #[serde(with = "instant::canonical", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHealthCheck {
    pub name: String,
    pub feeling: String,
    #[serde(with = "instant::canonical")]
    pub date: DateTime<Utc>,
}

impl NewHealthCheck {
    /// Creates a new submission.
    pub fn new(name: impl Into<String>, feeling: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            feeling: feeling.into(),
            date,
        }
    }

    /// Attaches store-assigned fields, producing the persisted form.
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> HealthCheck {
        HealthCheck {
            id,
            name: self.name,
            feeling: self.feeling,
            date: self.date,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn serializes_store_columns_with_canonical_instants() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 31, 5).unwrap();
        let record = NewHealthCheck::new("Ana", "Good", date).into_record(RecordId::new(3), created_at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Ana",
                "feeling": "Good",
                "date": "2024-06-01T09:30:00.000Z",
                "created_at": "2024-06-01T09:31:05.000Z",
            })
        );
    }

    #[test]
    fn accepts_camel_case_created_at() {
        let record: HealthCheck = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Ana",
            "feeling": "Okay",
            "date": "2024-06-01T09:30:00.000Z",
            "createdAt": "2024-06-01T09:30:00.000Z",
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::new(1));
    }
}
