use crate::{
    error::ApiError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use practice_alarm_api_structs::set_notification_permission::*;
use practice_alarm_domain::NotificationPermission;
use practice_alarm_infra::AlarmContext;
use tracing::info;

pub async fn set_notification_permission_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlarmContext>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = SetNotificationPermissionUseCase {
        permission: body.permission,
    };

    execute(usecase, &ctx)
        .await
        .map(|permission| HttpResponse::Ok().json(APIResponse::new(permission)))
        .map_err(|_| ApiError::InternalError)
}

/// Records the answer the user gave to the notification permission prompt
#[derive(Debug)]
pub struct SetNotificationPermissionUseCase {
    pub permission: NotificationPermission,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for SetNotificationPermissionUseCase {
    type Response = NotificationPermission;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &AlarmContext) -> Result<Self::Response, Self::Errors> {
        let previous = ctx.services.notification_permission.permission();
        ctx.services
            .notification_permission
            .set_permission(self.permission);
        if previous != self.permission {
            info!(
                "Notification permission changed from {} to {}",
                previous, self.permission
            );
        }

        Ok(self.permission)
    }
}
