use serde::{Deserialize, Serialize};

/// How often a habit is meant to be completed.
///
/// Informational only: no derived statistic currently depends on the
/// frequency value. Streaks are consecutive-day counts for every variant
/// (see [`Habit::streak_as_of`](super::Habit::streak_as_of)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitFrequency {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl HabitFrequency {
    /// All variants, in picker order.
    pub const ALL: [HabitFrequency; 4] = [
        HabitFrequency::Daily,
        HabitFrequency::Weekly,
        HabitFrequency::Monthly,
        HabitFrequency::Custom,
    ];

    /// Display name for the frequency.
    pub fn display_name(&self) -> &'static str {
        match self {
            HabitFrequency::Daily => "Daily",
            HabitFrequency::Weekly => "Weekly",
            HabitFrequency::Monthly => "Monthly",
            HabitFrequency::Custom => "Custom",
        }
    }

    /// Description of what the frequency means.
    pub fn description(&self) -> &'static str {
        match self {
            HabitFrequency::Daily => "Complete this habit every day",
            HabitFrequency::Weekly => "Complete this habit once per week",
            HabitFrequency::Monthly => "Complete this habit once per month",
            HabitFrequency::Custom => "Custom frequency schedule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&HabitFrequency::Weekly).unwrap();
        assert_eq!(json, "\"Weekly\"");

        let parsed: HabitFrequency = serde_json::from_str("\"Custom\"").unwrap();
        assert_eq!(parsed, HabitFrequency::Custom);
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(HabitFrequency::ALL.len(), 4);
        for frequency in HabitFrequency::ALL {
            assert_eq!(
                HabitFrequency::ALL.iter().filter(|f| **f == frequency).count(),
                1
            );
        }
    }
}
