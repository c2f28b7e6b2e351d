use super::fire_alarm::{fire_alarm, resolve_recipient};
use crate::shared::usecase::UseCase;
use chrono::Utc;
use practice_alarm_domain::{TriggerWindow, ID};
use practice_alarm_infra::AlarmContext;
use tracing::{error, info};

/// One tick of the alarm poller: fires every active `Alarm` of the signed
/// in `User` that is due now
#[derive(Debug)]
pub struct CheckAlarmsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckAlarmsUseCase {
    /// Ids of the `Alarm`s that fired
    type Response = Vec<ID>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let session = match ctx.services.sessions.current().await {
            Some(session) => session,
            None => return Ok(Vec::new()),
        };

        let alarms = ctx
            .repos
            .alarms
            .find_active_by_user(&session.user_id)
            .await
            .map_err(|e| {
                error!("Unable to fetch the active alarms: {:?}", e);
                UseCaseErrors::StorageError
            })?;

        let now = ctx.sys.now_local();
        let window = TriggerWindow::new(ctx.config.grace_minutes);
        let due = alarms
            .into_iter()
            .filter(|alarm| alarm.should_trigger_within(&now, window))
            .collect::<Vec<_>>();
        if due.is_empty() {
            return Ok(Vec::new());
        }

        let recipient = resolve_recipient(&session, ctx).await;
        let mut fired = Vec::with_capacity(due.len());
        for alarm in due {
            info!("Alarm: {} is due at {}", alarm.id, alarm.scheduled_time);
            let alarm_id = alarm.id.clone();
            match fire_alarm(alarm, recipient.clone(), now.with_timezone(&Utc), ctx).await {
                Ok(_) => fired.push(alarm_id),
                Err(e) => error!(
                    "Unable to mark alarm: {} as triggered. Error: {:?}",
                    alarm_id, e
                ),
            }
        }

        Ok(fired)
    }
}
