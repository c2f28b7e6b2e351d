use crate::alarm::Alarm;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub const NOTIFICATION_TITLE: &str = "DSA Practice Time!";
pub const NOTIFICATION_ICON: &str = "/favicon.ico";
pub const NOTIFICATION_TAG: &str = "dsa-alarm";

/// Whether the user has allowed notifications to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// The user has not answered the permission prompt yet
    Default,
}

impl Display for NotificationPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let permission = match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Default => "default",
        };
        write!(f, "{}", permission)
    }
}

#[derive(Error, Debug)]
#[error("Invalid notification permission: {0}")]
pub struct InvalidNotificationPermission(String);

impl FromStr for NotificationPermission {
    type Err = InvalidNotificationPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "default" => Ok(Self::Default),
            _ => Err(InvalidNotificationPermission(s.to_string())),
        }
    }
}

/// A single firing of an `Alarm` that should be fanned out to the
/// notification channels
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmFiring {
    /// Empty when no email address is known for the user
    pub recipient: String,
    pub title: String,
    pub url: String,
    pub scheduled_time: String,
    pub browser_enabled: bool,
    pub email_enabled: bool,
}

impl AlarmFiring {
    pub fn new(alarm: &Alarm, recipient: Option<String>) -> Self {
        Self {
            recipient: recipient.unwrap_or_default(),
            title: alarm.problem_title.clone(),
            url: alarm.problem_url.clone(),
            scheduled_time: alarm.scheduled_time.to_string(),
            browser_enabled: true,
            email_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    pub url: Option<String>,
}

/// Notification shown by the browser channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    /// Notifications with the same tag replace each other
    pub tag: String,
    pub data: NotificationData,
}

impl BrowserNotification {
    pub fn new(firing: &AlarmFiring) -> Self {
        Self {
            title: NOTIFICATION_TITLE.into(),
            body: format!("Time to solve: {}", firing.title),
            icon: NOTIFICATION_ICON.into(),
            tag: NOTIFICATION_TAG.into(),
            data: NotificationData {
                url: Some(firing.url.clone()).filter(|url| !url.is_empty()),
            },
        }
    }
}

/// Message posted to the background delivery worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerMessage {
    #[serde(rename = "SHOW_NOTIFICATION")]
    ShowNotification(BrowserNotification),
}

/// Parameters substituted into the email template owned by the email provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplateParams {
    pub to_email: String,
    pub problem_title: String,
    pub problem_url: String,
    pub scheduled_time: String,
    pub subject: String,
}

impl EmailTemplateParams {
    pub fn new(firing: &AlarmFiring) -> Self {
        Self {
            to_email: firing.recipient.clone(),
            problem_title: firing.title.clone(),
            problem_url: firing.url.clone(),
            scheduled_time: firing.scheduled_time.clone(),
            subject: format!("DSA Practice Reminder: {}", firing.title),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelFailure {
    #[error("Notification permission not granted, it is `{0}`")]
    PermissionNotGranted(NotificationPermission),
    #[error("Email service id or template id is not configured")]
    MissingConfiguration,
    #[error("There is no recipient email address")]
    MissingRecipient,
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Result of delivering an `AlarmFiring` through one channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelOutcome {
    Delivered,
    /// The channel was switched off for this firing
    Disabled,
    Failed(ChannelFailure),
}

impl ChannelOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    pub fn was_attempted(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
    pub browser: ChannelOutcome,
    pub email: ChannelOutcome,
}

impl DispatchReport {
    pub fn delivered_any(&self) -> bool {
        self.browser.is_delivered() || self.email.is_delivered()
    }

    pub fn attempted_any(&self) -> bool {
        self.browser.was_attempted() || self.email.was_attempted()
    }

    /// `last_triggered` is only stamped when the user could actually have
    /// been notified, or when no channel was asked to notify at all.
    /// Otherwise the firing is recorded as `last_attempted`.
    pub fn should_mark_triggered(&self) -> bool {
        self.delivered_any() || !self.attempted_any()
    }
}
