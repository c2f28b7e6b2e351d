use crate::dtos::{AlarmDTO, DispatchReportDTO};
use practice_alarm_domain::{Alarm, DispatchReport, Recurrence, ScheduledTime, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmResponse {
    pub alarm: AlarmDTO,
}

impl AlarmResponse {
    pub fn new(alarm: Alarm) -> Self {
        Self {
            alarm: AlarmDTO::new(alarm),
        }
    }
}

pub mod create_alarm {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub problem_title: String,
        pub problem_url: String,
        #[serde(default)]
        pub problem_difficulty: Option<String>,
        pub scheduled_time: ScheduledTime,
        /// Defaults to monday through friday
        #[serde(default)]
        pub recurrence: Option<Recurrence>,
        #[serde(default)]
        pub is_active: Option<bool>,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod get_alarms {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub alarms: Vec<AlarmDTO>,
    }

    impl APIResponse {
        pub fn new(alarms: Vec<Alarm>) -> Self {
            Self {
                alarms: alarms.into_iter().map(AlarmDTO::new).collect(),
            }
        }
    }
}

pub mod get_alarm {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod update_alarm {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub problem_title: Option<String>,
        #[serde(default)]
        pub problem_url: Option<String>,
        #[serde(default)]
        pub problem_difficulty: Option<String>,
        #[serde(default)]
        pub scheduled_time: Option<ScheduledTime>,
        #[serde(default)]
        pub recurrence: Option<Recurrence>,
        #[serde(default)]
        pub is_active: Option<bool>,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod delete_alarm {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod trigger_alarm {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub alarm: AlarmDTO,
        pub report: DispatchReportDTO,
    }

    impl APIResponse {
        pub fn new(alarm: Alarm, report: &DispatchReport) -> Self {
            Self {
                alarm: AlarmDTO::new(alarm),
                report: DispatchReportDTO::new(report),
            }
        }
    }
}
