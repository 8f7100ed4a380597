//! Contribution graph computation.
//!
//! Buckets a habit's completion log into Monday-aligned week columns over a
//! trailing day window, GitHub-style. The crate computes the cells, counts
//! and intensity tiers; turning tiers into colors is left to the rendering
//! layer.

use chrono::{DateTime, Datelike, Days, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Default trailing window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Completion-count intensity bucket for one day cell.
///
/// A monotonic step function of the per-day count; five tiers, matching the
/// five visual intensities of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityTier {
    /// Tier for a per-day completion count.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => IntensityTier::None,
            1 => IntensityTier::Low,
            2 => IntensityTier::Medium,
            3 => IntensityTier::High,
            _ => IntensityTier::Max,
        }
    }
}

/// One day cell of the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Completions whose timestamp falls on this local calendar day.
    pub count: usize,
    pub tier: IntensityTier,
}

/// A month-label transition at a week column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    /// Short month name ("Jan", "Feb", ...).
    pub label: String,
    /// Index into [`ContributionGraph::weeks`] where the month changes.
    pub week_index: usize,
}

/// A habit's completion activity bucketed for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionGraph {
    /// Week columns, oldest first. Each column holds up to seven day cells
    /// starting on a Monday; the first column begins on the Monday on or
    /// before the window start, and the last may be a partial week ending
    /// today.
    pub weeks: Vec<Vec<DayCell>>,
    /// A label at each week column whose first day's month differs from the
    /// previous column's.
    pub month_labels: Vec<MonthLabel>,
    /// Completions whose raw timestamp lies inside the window instants,
    /// `[now - days, now]` inclusive.
    pub total_in_window: usize,
}

impl ContributionGraph {
    /// Build the graph for the default 90-day window ending now.
    pub fn build_default(habit: &Habit) -> Self {
        Self::build(habit, DEFAULT_WINDOW_DAYS)
    }

    /// Build the graph for a `days`-long window ending now.
    pub fn build(habit: &Habit, days: u32) -> Self {
        Self::build_at(habit, days, Local::now())
    }

    /// Build the graph for a `days`-long window ending at `now`.
    pub fn build_at(habit: &Habit, days: u32, now: DateTime<Local>) -> Self {
        let end_instant = now.with_timezone(&Utc);
        let start_instant = end_instant - Duration::days(i64::from(days));

        let today = now.date_naive();
        let start_day = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(today);

        // First column starts on the Monday on or before the window start
        let mut day = start_day
            .checked_sub_days(Days::new(u64::from(start_day.weekday().num_days_from_monday())))
            .unwrap_or(start_day);

        let mut weeks: Vec<Vec<DayCell>> = Vec::new();
        let mut week: Vec<DayCell> = Vec::new();
        while day <= today {
            let count = habit.completions_on(day);
            week.push(DayCell {
                date: day,
                count,
                tier: IntensityTier::from_count(count),
            });
            if week.len() == 7 {
                weeks.push(std::mem::take(&mut week));
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        if !week.is_empty() {
            weeks.push(week);
        }

        let month_labels = month_labels(&weeks);

        let total_in_window = habit
            .audit
            .iter()
            .filter(|entry| entry.timestamp >= start_instant && entry.timestamp <= end_instant)
            .count();

        Self {
            weeks,
            month_labels,
            total_in_window,
        }
    }

    /// The cell for a specific date, if it lies inside the graph.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks
            .iter()
            .flatten()
            .find(|cell| cell.date == date)
    }
}

fn month_labels(weeks: &[Vec<DayCell>]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month = 0;

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first_day) = week.first() else {
            continue;
        };
        let month = first_day.date.month();
        if month != last_month {
            labels.push(MonthLabel {
                label: first_day.date.format("%b").to_string(),
                week_index,
            });
            last_month = month;
        }
    }

    labels
}
