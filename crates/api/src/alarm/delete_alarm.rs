use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::delete_alarm::*;
use practice_alarm_domain::{Alarm, ID};
use practice_alarm_infra::AlarmContext;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(alarm_id) => ApiError::NotFound(format!(
            "The alarm with id: {}, was not found.",
            alarm_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn delete_alarm_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let usecase = DeleteAlarmUseCase {
        user_id: session.user_id,
        alarm_id: path.alarm_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Ok().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteAlarmUseCase {
    pub user_id: ID,
    pub alarm_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let alarm = ctx
            .repos
            .alarms
            .find_by_user_and_id(&self.user_id, &self.alarm_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        match alarm {
            Some(alarm) => match ctx.repos.alarms.delete(&alarm.id).await {
                Some(deleted) => Ok(deleted),
                None => Err(UseCaseErrors::NotFound(self.alarm_id.clone())),
            },
            None => Err(UseCaseErrors::NotFound(self.alarm_id.clone())),
        }
    }
}
