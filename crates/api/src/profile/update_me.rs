use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::update_me::*;
use practice_alarm_domain::{Profile, ID};
use practice_alarm_infra::AlarmContext;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidEmail(email) => {
            ApiError::BadClientData(format!("The email: {} is not valid", email))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_me_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let usecase = UpdateMeUseCase {
        user_id: session.user_id,
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|profile| HttpResponse::Ok().json(APIResponse::new(profile)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateMeUseCase {
    pub user_id: ID,
    /// `None` or an empty string removes the email
    pub email: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidEmail(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMeUseCase {
    type Response = Profile;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let email = self
            .email
            .take()
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(UseCaseErrors::InvalidEmail(email.clone()));
            }
        }

        let mut profile = ctx
            .repos
            .profiles
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?
            .unwrap_or_else(|| Profile::new(self.user_id.clone()));
        profile.email = email;

        ctx.repos
            .profiles
            .save(&profile)
            .await
            .map(|_| profile)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
