pub mod dispatcher;
mod get_notification_permission;
mod set_notification_permission;

use actix_web::web;
use get_notification_permission::get_notification_permission_controller;
use set_notification_permission::set_notification_permission_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/permission",
        web::get().to(get_notification_permission_controller),
    );
    cfg.route(
        "/notifications/permission",
        web::put().to(set_notification_permission_controller),
    );
}
