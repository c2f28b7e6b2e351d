use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::get_me::*;
use practice_alarm_domain::{Profile, ID};
use practice_alarm_infra::AlarmContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let usecase = GetMeUseCase {
        user_id: session.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|profile| HttpResponse::Ok().json(APIResponse::new(profile)))
        .map_err(|_| ApiError::InternalError)
}

/// The `Profile` of the `User`, an empty one when nothing is stored yet
#[derive(Debug)]
pub struct GetMeUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMeUseCase {
    type Response = Profile;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.profiles.find(&self.user_id).await {
            Ok(profile) => Ok(profile.unwrap_or_else(|| Profile::new(self.user_id.clone()))),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
