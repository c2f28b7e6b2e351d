use crate::shared::entity::{Entity, ID};

/// Profile information about a `User` kept by the profile store
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: ID,
    /// Address that alarm emails should be sent to
    pub email: Option<String>,
}

impl Profile {
    pub fn new(user_id: ID) -> Self {
        Self {
            user_id,
            email: None,
        }
    }
}

impl Entity for Profile {
    fn id(&self) -> &ID {
        &self.user_id
    }
}

/// The authenticated `User` the application is currently acting for
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: ID,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: ID, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    /// Email to notify, preferring the profile email over the one
    /// attached to the session itself
    pub fn notification_email(&self, profile: Option<&Profile>) -> Option<String> {
        profile
            .and_then(|p| p.email.clone())
            .filter(|email| !email.is_empty())
            .or_else(|| self.email.clone())
            .filter(|email| !email.is_empty())
    }
}
