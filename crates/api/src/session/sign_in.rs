use crate::{
    error::ApiError,
    job_schedulers::AlarmPoller,
    shared::{
        auth::decode_session_token,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use practice_alarm_api_structs::sign_in::*;
use practice_alarm_domain::Session;
use practice_alarm_infra::AlarmContext;
use tracing::info;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidToken => {
            ApiError::Unauthorized("The session token is not valid".into())
        }
    }
}

/// Signing in starts the alarm poller
pub async fn sign_in_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<AlarmContext>,
    poller: web::Data<AlarmPoller>,
) -> Result<HttpResponse, ApiError> {
    let usecase = SignInUseCase {
        token: body.0.token,
    };

    let session = execute(usecase, &ctx).await.map_err(handle_error)?;
    poller.start();

    Ok(HttpResponse::Ok().json(APIResponse::new(Some(session), poller.is_running())))
}

#[derive(Debug)]
pub struct SignInUseCase {
    pub token: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidToken,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SignInUseCase {
    type Response = Session;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let session = decode_session_token(self.token.trim(), &ctx.config.session_jwt_secret)
            .map_err(|_| UseCaseErrors::InvalidToken)?;

        ctx.services.sessions.set(session.clone()).await;
        info!("User: {} signed in", session.user_id);

        Ok(session)
    }
}
