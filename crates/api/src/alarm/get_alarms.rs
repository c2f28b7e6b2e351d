use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::get_alarms::*;
use practice_alarm_domain::{Alarm, ID};
use practice_alarm_infra::AlarmContext;

pub async fn get_alarms_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let usecase = GetAlarmsUseCase {
        user_id: session.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|alarms| HttpResponse::Ok().json(APIResponse::new(alarms)))
        .map_err(|_| ApiError::InternalError)
}

#[derive(Debug)]
pub struct GetAlarmsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAlarmsUseCase {
    /// Newest first
    type Response = Vec<Alarm>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .alarms
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
