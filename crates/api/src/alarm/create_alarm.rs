use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::create_alarm::*;
use practice_alarm_domain::{Alarm, Recurrence, ScheduledTime, ID};
use practice_alarm_infra::AlarmContext;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::EmptyProblemTitle => {
            ApiError::BadClientData("The problem title can not be empty".into())
        }
        UseCaseErrors::EmptyRecurrence => ApiError::BadClientData(
            "An alarm has to recur on at least one weekday".into(),
        ),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn create_alarm_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateAlarmUseCase {
        user_id: session.user_id,
        problem_title: body.problem_title,
        problem_url: body.problem_url,
        problem_difficulty: body.problem_difficulty,
        scheduled_time: body.scheduled_time,
        recurrence: body.recurrence,
        is_active: body.is_active.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Created().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateAlarmUseCase {
    pub user_id: ID,
    pub problem_title: String,
    pub problem_url: String,
    pub problem_difficulty: Option<String>,
    pub scheduled_time: ScheduledTime,
    /// Monday through friday when not given
    pub recurrence: Option<Recurrence>,
    pub is_active: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyProblemTitle,
    EmptyRecurrence,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        if self.problem_title.trim().is_empty() {
            return Err(UseCaseErrors::EmptyProblemTitle);
        }
        let recurrence = self.recurrence.take().unwrap_or_else(Recurrence::weekdays);
        if recurrence.is_empty() {
            return Err(UseCaseErrors::EmptyRecurrence);
        }

        let mut alarm = Alarm::new(
            self.user_id.clone(),
            self.problem_title.trim().to_string(),
            self.problem_url.trim().to_string(),
            self.scheduled_time,
            recurrence,
            ctx.sys.get_timestamp_millis(),
        );
        alarm.problem_difficulty = self
            .problem_difficulty
            .take()
            .filter(|difficulty| !difficulty.trim().is_empty());
        alarm.is_active = self.is_active;

        ctx.repos
            .alarms
            .insert(&alarm)
            .await
            .map(|_| alarm)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
