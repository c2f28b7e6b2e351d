use practice_alarm_domain::{Profile, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDTO {
    pub user_id: ID,
    pub email: Option<String>,
}

impl ProfileDTO {
    pub fn new(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            email: profile.email,
        }
    }
}
