use super::fire_alarm::{fire_alarm, resolve_recipient, FiredAlarm};
use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use practice_alarm_api_structs::trigger_alarm::*;
use practice_alarm_domain::{Session, ID};
use practice_alarm_infra::AlarmContext;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::Unauthorized(alarm_id) => ApiError::Unauthorized(format!(
            "Not allowed to trigger the alarm with id: {}",
            alarm_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn trigger_alarm_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let usecase = TriggerAlarmUseCase {
        session,
        alarm_id: path.alarm_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|fired| HttpResponse::Ok().json(APIResponse::new(fired.alarm, &fired.report)))
        .map_err(handle_error)
}

/// Fires an `Alarm` right away, no matter if it is active or due
#[derive(Debug)]
pub struct TriggerAlarmUseCase {
    /// The requester, has to own the `Alarm`
    pub session: Session,
    pub alarm_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    /// Also used for unknown ids so that ids of other users are not revealed
    Unauthorized(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for TriggerAlarmUseCase {
    type Response = FiredAlarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let alarm = ctx
            .repos
            .alarms
            .find_by_user_and_id(&self.session.user_id, &self.alarm_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?
            .ok_or_else(|| UseCaseErrors::Unauthorized(self.alarm_id.clone()))?;

        let recipient = resolve_recipient(&self.session, ctx).await;
        let now = ctx.sys.now_local().with_timezone(&Utc);
        fire_alarm(alarm, recipient, now, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
