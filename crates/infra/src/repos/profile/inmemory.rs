use super::IProfileRepo;
use crate::repos::shared::inmemory_repo::*;
use practice_alarm_domain::{Profile, ID};

pub struct InMemoryProfileRepo {
    profiles: std::sync::Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self {
            profiles: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryProfileRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IProfileRepo for InMemoryProfileRepo {
    async fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        if !save(profile, &self.profiles) {
            insert(profile, &self.profiles);
        }
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<Profile>> {
        Ok(find(user_id, &self.profiles))
    }
}
