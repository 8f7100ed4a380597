//! Statistics derived from a habit's completion log.
//!
//! Streak and recency queries live on [`Habit`](crate::habit::Habit) itself;
//! this module holds the heavier windowed computations.

mod contribution;

pub use contribution::{
    ContributionGraph, DayCell, IntensityTier, MonthLabel, DEFAULT_WINDOW_DAYS,
};
