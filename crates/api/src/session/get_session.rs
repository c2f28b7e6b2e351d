use super::owned_session;
use crate::{error::ApiError, job_schedulers::AlarmPoller, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::get_session::*;
use practice_alarm_infra::AlarmContext;

pub async fn get_session_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlarmContext>,
    poller: web::Data<AlarmPoller>,
) -> Result<HttpResponse, ApiError> {
    let caller = protect_route(&http_req, &ctx)?;

    let session = owned_session(&caller, &ctx).await?;
    Ok(HttpResponse::Ok().json(APIResponse::new(session, poller.is_running())))
}
