use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::update_alarm::*;
use practice_alarm_domain::{Alarm, Recurrence, ScheduledTime, ID};
use practice_alarm_infra::AlarmContext;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(alarm_id) => ApiError::NotFound(format!(
            "The alarm with id: {}, was not found.",
            alarm_id
        )),
        UseCaseErrors::EmptyProblemTitle => {
            ApiError::BadClientData("The problem title can not be empty".into())
        }
        UseCaseErrors::EmptyRecurrence => ApiError::BadClientData(
            "An alarm has to recur on at least one weekday".into(),
        ),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_alarm_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    let session = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateAlarmUseCase {
        user_id: session.user_id,
        alarm_id: path.alarm_id.clone(),
        problem_title: body.problem_title,
        problem_url: body.problem_url,
        problem_difficulty: body.problem_difficulty,
        scheduled_time: body.scheduled_time,
        recurrence: body.recurrence,
        is_active: body.is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Ok().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

/// Fields left as `None` keep their current value
#[derive(Debug, Default)]
pub struct UpdateAlarmUseCase {
    pub user_id: ID,
    pub alarm_id: ID,
    pub problem_title: Option<String>,
    pub problem_url: Option<String>,
    pub problem_difficulty: Option<String>,
    pub scheduled_time: Option<ScheduledTime>,
    pub recurrence: Option<Recurrence>,
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    EmptyProblemTitle,
    EmptyRecurrence,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let mut alarm = match ctx
            .repos
            .alarms
            .find_by_user_and_id(&self.user_id, &self.alarm_id)
            .await
        {
            Ok(Some(alarm)) => alarm,
            Ok(None) => return Err(UseCaseErrors::NotFound(self.alarm_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        };

        if let Some(title) = self.problem_title.take() {
            if title.trim().is_empty() {
                return Err(UseCaseErrors::EmptyProblemTitle);
            }
            alarm.problem_title = title.trim().to_string();
        }
        if let Some(url) = self.problem_url.take() {
            alarm.problem_url = url.trim().to_string();
        }
        if let Some(difficulty) = self.problem_difficulty.take() {
            alarm.problem_difficulty = Some(difficulty).filter(|d| !d.trim().is_empty());
        }
        if let Some(scheduled_time) = self.scheduled_time {
            alarm.scheduled_time = scheduled_time;
        }
        if let Some(recurrence) = self.recurrence.take() {
            if recurrence.is_empty() {
                return Err(UseCaseErrors::EmptyRecurrence);
            }
            alarm.recurrence = recurrence;
        }
        if let Some(is_active) = self.is_active {
            alarm.is_active = is_active;
        }
        alarm.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .alarms
            .save(&alarm)
            .await
            .map(|_| alarm)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
