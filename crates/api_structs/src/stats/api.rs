use practice_alarm_domain::AlarmStats;
use serde::{Deserialize, Serialize};

pub mod get_stats {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: AlarmStats,
    }

    impl APIResponse {
        pub fn new(stats: AlarmStats) -> Self {
            Self { stats }
        }
    }
}
