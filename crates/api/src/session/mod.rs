mod get_session;
mod sign_in;
mod sign_out;

use crate::error::ApiError;
use actix_web::web;
use get_session::get_session_controller;
use practice_alarm_domain::Session;
use practice_alarm_infra::AlarmContext;
pub use sign_in::SignInUseCase;
use sign_in::sign_in_controller;
use sign_out::sign_out_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::post().to(sign_in_controller));
    cfg.route("/session", web::get().to(get_session_controller));
    cfg.route("/session", web::delete().to(sign_out_controller));
}

/// The signed in `Session`, if any, as long as it belongs to the `caller`
async fn owned_session(caller: &Session, ctx: &AlarmContext) -> Result<Option<Session>, ApiError> {
    match ctx.services.sessions.current().await {
        Some(session) if session.user_id != caller.user_id => Err(ApiError::Unauthorized(
            "The signed in session belongs to another user".into(),
        )),
        session => Ok(session),
    }
}
