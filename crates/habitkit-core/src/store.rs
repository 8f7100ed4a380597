//! In-memory habit collection with persist-on-mutation.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::habit::Habit;
use crate::storage::HabitPersistence;

/// Owns the canonical habit collection.
///
/// Every mutating operation applies its change in memory and then persists
/// the full collection through an explicit `persist` call before returning,
/// so callers observe a synchronous contract. All mutators take `&mut self`:
/// one writer at a time, with saves strictly ordered.
///
/// Mutators do not fail. A persistence failure is logged and the in-memory
/// change stands; the next successful save writes the full state anyway.
/// Other components read habits through the accessors and submit changes
/// back through these methods; none of them hold the collection.
pub struct HabitStore {
    habits: Vec<Habit>,
    persistence: HabitPersistence,
}

impl HabitStore {
    /// Open the store over the default snapshot location, loading any
    /// previously saved collection.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self> {
        Ok(Self::with_persistence(HabitPersistence::open()?))
    }

    /// Open the store over a specific persistence adapter.
    pub fn with_persistence(persistence: HabitPersistence) -> Self {
        let habits = persistence.load();
        Self {
            habits,
            persistence,
        }
    }

    /// All habits, in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up a habit by id.
    pub fn get(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Habits that are currently effective, preserving relative order.
    pub fn active_habits(&self) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|habit| habit.is_currently_effective())
            .collect()
    }

    /// Habits outside their effective window, preserving relative order.
    pub fn inactive_habits(&self) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|habit| !habit.is_currently_effective())
            .collect()
    }

    /// Add a habit. Ids are caller-generated; no uniqueness check is made
    /// beyond that.
    pub fn add(&mut self, habit: Habit) {
        self.habits.push(habit);
        self.persist();
    }

    /// Remove every habit matching the id. No-op if absent.
    pub fn remove(&mut self, id: Uuid) {
        self.habits.retain(|habit| habit.id != id);
        self.persist();
    }

    /// Replace the habit with the matching id wholesale. No-op if absent.
    pub fn update(&mut self, habit: Habit) {
        if let Some(slot) = self.habits.iter_mut().find(|h| h.id == habit.id) {
            *slot = habit;
        }
        self.persist();
    }

    /// Record a completion now for the habit with the given id. No-op if
    /// the id is unknown.
    pub fn record_completion(&mut self, id: Uuid, notes: Option<String>) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.record_completion(notes);
        }
        self.persist();
    }

    /// Record a completion at a caller-supplied instant, which may lie in
    /// the past or the future. No-op if the id is unknown.
    pub fn record_historic_completion(
        &mut self,
        id: Uuid,
        timestamp: DateTime<Utc>,
        notes: Option<String>,
    ) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.record_completion_at(timestamp, notes);
        }
        self.persist();
    }

    /// End the habit's effective window now.
    ///
    /// Overwrites any previously set end bound; [`unarchive`](Self::unarchive)
    /// will not bring the old value back.
    pub fn archive(&mut self, id: Uuid) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            let now = Utc::now();
            habit.effective_to = Some(now);
            habit.updated_at = now;
        }
        self.persist();
    }

    /// Clear the habit's end bound, making it effective again.
    pub fn unarchive(&mut self, id: Uuid) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            habit.effective_to = None;
            habit.updated_at = Utc::now();
        }
        self.persist();
    }

    fn persist(&self) {
        if let Err(error) = self.persistence.save(&self.habits) {
            warn!(path = %self.persistence.path().display(), error = %error, "failed to persist habit collection");
        }
    }
}
