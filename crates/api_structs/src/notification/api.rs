use practice_alarm_domain::NotificationPermission;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPermissionResponse {
    pub permission: NotificationPermission,
}

impl NotificationPermissionResponse {
    pub fn new(permission: NotificationPermission) -> Self {
        Self { permission }
    }
}

pub mod get_notification_permission {
    use super::*;

    pub type APIResponse = NotificationPermissionResponse;
}

pub mod set_notification_permission {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub permission: NotificationPermission,
    }

    pub type APIResponse = NotificationPermissionResponse;
}
