use crate::dtos::SessionDTO;
use practice_alarm_domain::Session;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: Option<SessionDTO>,
    /// Whether the alarm poller is currently checking alarms
    pub poller_running: bool,
}

impl SessionResponse {
    pub fn new(session: Option<Session>, poller_running: bool) -> Self {
        Self {
            session: session.map(SessionDTO::new),
            poller_running,
        }
    }
}

pub mod sign_in {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub token: String,
    }

    pub type APIResponse = SessionResponse;
}

pub mod sign_out {
    use super::*;

    pub type APIResponse = SessionResponse;
}

pub mod get_session {
    use super::*;

    pub type APIResponse = SessionResponse;
}
