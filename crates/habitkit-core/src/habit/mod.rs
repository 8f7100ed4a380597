//! Habit entity and the statistics derived from its completion log.
//!
//! A [`Habit`] owns an append-only audit log of [`HabitAuditEntry`]
//! completions. Everything the UI displays (streaks, recency, activity
//! state) is derived from that log; nothing is stored redundantly.
//!
//! Day-based queries bucket instants by the local calendar day, with the
//! day boundary at midnight. Each wall-clock query has an `_as_of`/`_on`
//! variant taking the reference day explicitly so tests stay deterministic.

mod audit;
mod frequency;

pub use audit::HabitAuditEntry;
pub use frequency::HabitFrequency;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trackable recurring activity with a completion history and an optional
/// effective date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, assigned at creation and never changed.
    pub id: Uuid,
    /// Display name. Forms enforce non-empty on save; the core does not.
    pub name: String,
    /// Description of what the habit entails. May be empty.
    pub description: String,
    /// Intended completion cadence.
    pub frequency: HabitFrequency,
    /// Audit log of all completions, in insertion order. Historic entries
    /// mean the order is not necessarily timestamp-sorted.
    pub audit: Vec<HabitAuditEntry>,
    /// When the habit was created.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// When the habit was last modified.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    /// Optional instant from which the habit counts as active.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub effective_from: Option<DateTime<Utc>>,
    /// Optional instant after which the habit no longer counts as active.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl Habit {
    /// Create a habit with a fresh id and creation timestamps of now.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        frequency: HabitFrequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            frequency,
            audit: Vec::new(),
            created_at: now,
            updated_at: now,
            effective_from: None,
            effective_to: None,
        }
    }

    /// Append a completion entry stamped now.
    pub fn record_completion(&mut self, notes: Option<String>) {
        self.record_completion_at(Utc::now(), notes);
    }

    /// Append a completion entry at a caller-supplied instant.
    ///
    /// Historic and future timestamps are both allowed; no ordering is
    /// enforced against existing entries.
    pub fn record_completion_at(&mut self, timestamp: DateTime<Utc>, notes: Option<String>) {
        self.audit.push(HabitAuditEntry::at(timestamp, notes));
        self.updated_at = Utc::now();
    }

    /// Total number of recorded completions.
    pub fn total_completions(&self) -> usize {
        self.audit.len()
    }

    /// The entry with the latest timestamp, if any.
    ///
    /// On exact timestamp ties any of the tied entries may be returned.
    pub fn most_recent_completion(&self) -> Option<&HabitAuditEntry> {
        self.audit.iter().max_by_key(|entry| entry.timestamp)
    }

    /// Whether the habit is active at the given instant.
    ///
    /// Both window bounds are inclusive and each is checked independently.
    /// An inverted window (`effective_from` after `effective_to`) is not
    /// rejected anywhere; such a habit is simply effective at no instant.
    pub fn is_effective(&self, at: DateTime<Utc>) -> bool {
        // Not effective yet
        if let Some(from) = self.effective_from {
            if at < from {
                return false;
            }
        }
        // No longer effective
        if let Some(to) = self.effective_to {
            if at > to {
                return false;
            }
        }
        true
    }

    /// Whether the habit is active right now.
    pub fn is_currently_effective(&self) -> bool {
        self.is_effective(Utc::now())
    }

    /// Number of completions recorded on the given local calendar day.
    pub fn completions_on(&self, day: NaiveDate) -> usize {
        self.audit
            .iter()
            .filter(|entry| local_day(entry.timestamp) == day)
            .count()
    }

    /// Entries recorded on the given local calendar day, newest first.
    pub fn entries_on(&self, day: NaiveDate) -> Vec<&HabitAuditEntry> {
        let mut entries: Vec<_> = self
            .audit
            .iter()
            .filter(|entry| local_day(entry.timestamp) == day)
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Whether any completion falls on the given local calendar day.
    pub fn is_done_on(&self, day: NaiveDate) -> bool {
        self.audit
            .iter()
            .any(|entry| local_day(entry.timestamp) == day)
    }

    /// Whether any completion falls on today's local calendar day.
    pub fn is_done_today(&self) -> bool {
        self.is_done_on(Local::now().date_naive())
    }

    /// Consecutive-day completion streak ending on `today`.
    ///
    /// 0 when `today` has no completion; otherwise 1 for today plus one per
    /// immediately-preceding day with at least one completion, stopping at
    /// the first gap. The streak is counted the same way for every
    /// [`HabitFrequency`]: a weekly habit completed once per week shows a
    /// streak of 1 that resets the next day.
    pub fn streak_as_of(&self, today: NaiveDate) -> u32 {
        if !self.is_done_on(today) {
            return 0;
        }

        let mut streak = 1; // Today counts
        let mut day = today;

        // Go back day by day
        while let Some(previous) = day.pred_opt() {
            if !self.is_done_on(previous) {
                break;
            }
            streak += 1;
            day = previous;
        }

        streak
    }

    /// Consecutive-day completion streak ending today.
    pub fn current_streak(&self) -> u32 {
        self.streak_as_of(Local::now().date_naive())
    }

    /// Whole calendar days between the most recent completion's local day
    /// and `today`, or `None` for a habit never completed.
    ///
    /// Negative when the most recent entry is future-dated.
    pub fn days_since_last_completion_as_of(&self, today: NaiveDate) -> Option<i64> {
        let last = self.most_recent_completion()?;
        Some((today - local_day(last.timestamp)).num_days())
    }

    /// Whole calendar days since the most recent completion.
    pub fn days_since_last_completion(&self) -> Option<i64> {
        self.days_since_last_completion_as_of(Local::now().date_naive())
    }
}

// Identity equality: two habits are the same habit when their ids match,
// even if every other field differs (e.g. before and after an edit).
impl PartialEq for Habit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Habit {}

impl std::hash::Hash for Habit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Local calendar day that an instant falls on.
pub(crate) fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}
