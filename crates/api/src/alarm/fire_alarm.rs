use crate::notification::dispatcher::NotificationDispatcher;
use chrono::{DateTime, Utc};
use practice_alarm_domain::{Alarm, AlarmFiring, DispatchReport, Session};
use practice_alarm_infra::AlarmContext;
use tracing::{error, warn};

#[derive(Debug)]
pub struct FiredAlarm {
    pub alarm: Alarm,
    pub report: DispatchReport,
}

/// Email address the notifications for the `Session` user should go to.
/// The profile email wins over the session email.
pub async fn resolve_recipient(session: &Session, ctx: &AlarmContext) -> Option<String> {
    let profile = match ctx.repos.profiles.find(&session.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            error!(
                "Unable to look up the profile of user: {}. Falling back to the session email. Error: {:?}",
                session.user_id, e
            );
            None
        }
    };
    session.notification_email(profile.as_ref())
}

/// Dispatches the notifications for the `Alarm` and stamps `last_triggered`.
///
/// When every attempted channel failed `last_attempted` is stamped instead,
/// which keeps the `Alarm` from firing again the same day. The returned
/// error is only about the stamp, the notifications have already been
/// dispatched at that point.
pub async fn fire_alarm(
    mut alarm: Alarm,
    recipient: Option<String>,
    now: DateTime<Utc>,
    ctx: &AlarmContext,
) -> anyhow::Result<FiredAlarm> {
    let firing = AlarmFiring::new(&alarm, recipient);
    let report = NotificationDispatcher::new(ctx).dispatch(&firing).await;

    if report.should_mark_triggered() {
        ctx.repos.alarms.set_last_triggered(&alarm.id, now).await?;
        alarm.mark_triggered(now);
    } else {
        warn!(
            "No notification channel delivered alarm: {}, it is only marked as attempted",
            alarm.id
        );
        ctx.repos.alarms.set_last_attempted(&alarm.id, now).await?;
        alarm.mark_attempted(now);
    }

    Ok(FiredAlarm { alarm, report })
}
