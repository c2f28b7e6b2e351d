use practice_alarm_domain::{Session, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionDTO {
    pub user_id: ID,
    pub email: Option<String>,
}

impl SessionDTO {
    pub fn new(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            email: session.email,
        }
    }
}
