use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable record of a single habit completion.
///
/// Entries are created only by recording a completion (now or historic) and
/// are never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitAuditEntry {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// Instant of completion. Historic entries may carry any timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Optional notes about this completion.
    #[serde(default)]
    pub notes: Option<String>,
}

impl HabitAuditEntry {
    /// Create an entry stamped now.
    pub fn new(notes: Option<String>) -> Self {
        Self::at(Utc::now(), notes)
    }

    /// Create an entry at a specific instant.
    pub fn at(timestamp: DateTime<Utc>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            notes,
        }
    }
}

// Identity equality: two entries with identical timestamps and notes but
// different ids are distinct records.
impl PartialEq for HabitAuditEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HabitAuditEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id_only() {
        let timestamp = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let a = HabitAuditEntry::at(timestamp, Some("same".into()));
        let b = HabitAuditEntry::at(timestamp, Some("same".into()));

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn timestamp_round_trips_as_epoch_seconds() {
        let entry = HabitAuditEntry::at(DateTime::from_timestamp(1_700_000_000, 0).unwrap(), None);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["timestamp"], 1_700_000_000i64);
        assert!(value["notes"].is_null());

        let parsed: HabitAuditEntry = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.timestamp, entry.timestamp);
    }
}
