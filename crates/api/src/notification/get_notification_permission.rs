use crate::{error::ApiError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::get_notification_permission::*;
use practice_alarm_infra::AlarmContext;

pub async fn get_notification_permission_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let permission = ctx.services.notification_permission.permission();
    Ok(HttpResponse::Ok().json(APIResponse::new(permission)))
}
