use super::owned_session;
use crate::{error::ApiError, job_schedulers::AlarmPoller, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::sign_out::*;
use practice_alarm_infra::AlarmContext;
use tracing::info;

/// Signing out stops the alarm poller
pub async fn sign_out_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlarmContext>,
    poller: web::Data<AlarmPoller>,
) -> Result<HttpResponse, ApiError> {
    let caller = protect_route(&http_req, &ctx)?;

    if owned_session(&caller, &ctx).await?.is_some() {
        if let Some(session) = ctx.services.sessions.clear().await {
            info!("User: {} signed out", session.user_id);
        }
    }
    poller.stop();

    Ok(HttpResponse::Ok().json(APIResponse::new(None, poller.is_running())))
}
