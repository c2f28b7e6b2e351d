use chrono::{DateTime, Utc};
use practice_alarm_domain::{
    Alarm, ChannelOutcome, DispatchReport, Recurrence, ScheduledTime, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDTO {
    pub id: ID,
    pub user_id: ID,
    pub problem_title: String,
    pub problem_url: String,
    pub problem_difficulty: Option<String>,
    pub scheduled_time: ScheduledTime,
    pub recurrence: Recurrence,
    pub is_active: bool,
    pub last_triggered: Option<DateTime<Utc>>,
    pub last_attempted: Option<DateTime<Utc>>,
    pub created: i64,
    pub updated: i64,
}

impl AlarmDTO {
    pub fn new(alarm: Alarm) -> Self {
        Self {
            id: alarm.id,
            user_id: alarm.user_id,
            problem_title: alarm.problem_title,
            problem_url: alarm.problem_url,
            problem_difficulty: alarm.problem_difficulty,
            scheduled_time: alarm.scheduled_time,
            recurrence: alarm.recurrence,
            is_active: alarm.is_active,
            last_triggered: alarm.last_triggered,
            last_attempted: alarm.last_attempted,
            created: alarm.created,
            updated: alarm.updated,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Delivered,
    Disabled,
    Failed,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelOutcomeDTO {
    pub status: ChannelStatus,
    /// Why the channel failed, only set when `status` is `failed`
    pub reason: Option<String>,
}

impl ChannelOutcomeDTO {
    pub fn new(outcome: &ChannelOutcome) -> Self {
        match outcome {
            ChannelOutcome::Delivered => Self {
                status: ChannelStatus::Delivered,
                reason: None,
            },
            ChannelOutcome::Disabled => Self {
                status: ChannelStatus::Disabled,
                reason: None,
            },
            ChannelOutcome::Failed(failure) => Self {
                status: ChannelStatus::Failed,
                reason: Some(failure.to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReportDTO {
    pub browser: ChannelOutcomeDTO,
    pub email: ChannelOutcomeDTO,
}

impl DispatchReportDTO {
    pub fn new(report: &DispatchReport) -> Self {
        Self {
            browser: ChannelOutcomeDTO::new(&report.browser),
            email: ChannelOutcomeDTO::new(&report.email),
        }
    }
}
