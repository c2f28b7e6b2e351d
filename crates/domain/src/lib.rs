mod alarm;
mod notification;
mod shared;
mod stats;
mod time_of_day;
mod user;

pub use alarm::{Alarm, TriggerWindow};
pub use notification::{
    AlarmFiring, BrowserNotification, ChannelFailure, ChannelOutcome, DispatchReport,
    EmailTemplateParams, InvalidNotificationPermission, NotificationData, NotificationPermission,
    WorkerMessage, NOTIFICATION_ICON, NOTIFICATION_TAG, NOTIFICATION_TITLE,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{InvalidWeekdayError, Recurrence, WeekdayName};
pub use stats::{AlarmStats, DifficultyStats, WeekdayLoad};
pub use time_of_day::{InvalidScheduledTimeError, ScheduledTime};
pub use user::{Profile, Session};
