use crate::dtos::ProfileDTO;
use practice_alarm_domain::Profile;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: ProfileDTO,
}

impl ProfileResponse {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: ProfileDTO::new(profile),
        }
    }
}

pub mod get_me {
    use super::*;

    pub type APIResponse = ProfileResponse;
}

pub mod update_me {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Address alarm emails are sent to, `None` clears it
        #[serde(default)]
        pub email: Option<String>,
    }

    pub type APIResponse = ProfileResponse;
}
