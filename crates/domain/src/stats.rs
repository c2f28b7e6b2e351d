use crate::{alarm::Alarm, shared::recurrence::weekday_to_str};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DifficultyStats {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    /// Missing or unknown difficulty labels
    pub unrated: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayLoad {
    pub day: String,
    pub active_alarms: usize,
}

/// Progress overview over all the `Alarm`s of a `User`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmStats {
    pub total_alarms: usize,
    pub active_alarms: usize,
    pub difficulty: DifficultyStats,
    /// Number of active alarms recurring on each weekday, monday first
    pub weekly_schedule: Vec<WeekdayLoad>,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl AlarmStats {
    pub fn new(alarms: &[Alarm]) -> Self {
        let mut difficulty = DifficultyStats::default();
        for alarm in alarms {
            let label = alarm
                .problem_difficulty
                .as_deref()
                .map(|d| d.trim().to_lowercase());
            match label.as_deref() {
                Some("easy") => difficulty.easy += 1,
                Some("medium") => difficulty.medium += 1,
                Some("hard") => difficulty.hard += 1,
                _ => difficulty.unrated += 1,
            }
        }

        let active = alarms.iter().filter(|a| a.is_active).collect::<Vec<_>>();
        let weekly_schedule = WEEK
            .iter()
            .map(|day| WeekdayLoad {
                day: weekday_to_str(*day).to_string(),
                active_alarms: active.iter().filter(|a| a.recurrence.contains(*day)).count(),
            })
            .collect();

        Self {
            total_alarms: alarms.len(),
            active_alarms: active.len(),
            difficulty,
            weekly_schedule,
        }
    }
}
