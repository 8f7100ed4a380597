//! JSON snapshot persistence for the habit collection.
//!
//! The whole collection is one JSON array in `habits.json` under the local
//! data directory. A missing file is the normal first-run state and loads as
//! an empty collection; a corrupt file is logged and also loads as empty, so
//! startup never fails on bad state.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::PersistenceError;
use crate::habit::Habit;
use crate::storage::data_dir;

/// Snapshot file name.
const SNAPSHOT_FILE: &str = "habits.json";

/// Loads and saves the habit collection as a single local JSON document.
pub struct HabitPersistence {
    path: PathBuf,
}

impl HabitPersistence {
    /// Open the adapter at the default snapshot location.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self, PersistenceError> {
        Ok(Self {
            path: data_dir()?.join(SNAPSHOT_FILE),
        })
    }

    /// Open the adapter at a custom snapshot path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full collection from disk.
    ///
    /// A missing file yields an empty collection. An unreadable or
    /// undecodable file is logged and also yields an empty collection;
    /// neither case propagates as an error.
    pub fn load(&self) -> Vec<Habit> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %self.path.display(), error = %error, "failed to read habit snapshot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(habits) => habits,
            Err(error) => {
                warn!(path = %self.path.display(), error = %error, "malformed habit snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with the full collection.
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// target, so a concurrent reader never observes a partial write.
    ///
    /// # Errors
    /// Returns an error if serialization or either filesystem step fails.
    pub fn save(&self, habits: &[Habit]) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(habits)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::HabitFrequency;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn adapter_in(dir: &TempDir) -> HabitPersistence {
        HabitPersistence::with_path(dir.path().join(SNAPSHOT_FILE))
    }

    fn sample_habit() -> Habit {
        // Whole-second timestamps so equality survives the wire format
        let mut habit = Habit::new("Meditate", "Five minutes", HabitFrequency::Daily);
        habit.created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        habit.updated_at = DateTime::from_timestamp(1_700_000_600, 0).unwrap();
        habit.effective_from = Some(DateTime::from_timestamp(1_699_900_000, 0).unwrap());
        habit.record_completion_at(
            DateTime::from_timestamp(1_700_000_300, 0).unwrap(),
            Some("morning".into()),
        );
        habit.updated_at = DateTime::from_timestamp(1_700_000_600, 0).unwrap();
        habit
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);

        assert!(adapter.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);
        let habit = sample_habit();

        adapter.save(std::slice::from_ref(&habit)).unwrap();
        let loaded = adapter.load();

        assert_eq!(loaded.len(), 1);
        let restored = &loaded[0];
        assert_eq!(restored.id, habit.id);
        assert_eq!(restored.name, habit.name);
        assert_eq!(restored.description, habit.description);
        assert_eq!(restored.frequency, habit.frequency);
        assert_eq!(restored.created_at, habit.created_at);
        assert_eq!(restored.updated_at, habit.updated_at);
        assert_eq!(restored.effective_from, habit.effective_from);
        assert_eq!(restored.effective_to, habit.effective_to);
        assert_eq!(restored.audit.len(), 1);
        assert_eq!(restored.audit[0].id, habit.audit[0].id);
        assert_eq!(restored.audit[0].timestamp, habit.audit[0].timestamp);
        assert_eq!(restored.audit[0].notes, habit.audit[0].notes);
    }

    #[test]
    fn corrupt_snapshot_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);
        fs::write(adapter.path(), "not json at all {").unwrap();

        assert!(adapter.load().is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);

        adapter.save(&[sample_habit()]).unwrap();
        adapter.save(&[sample_habit(), sample_habit()]).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![SNAPSHOT_FILE]);
        assert_eq!(adapter.load().len(), 2);
    }

    #[test]
    fn snapshot_is_a_json_array_of_habits() {
        let dir = TempDir::new().unwrap();
        let adapter = adapter_in(&dir);

        adapter.save(&[sample_habit()]).unwrap();

        let raw = fs::read_to_string(adapter.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "Meditate");
        assert_eq!(value[0]["createdAt"], 1_700_000_000i64);
    }
}
