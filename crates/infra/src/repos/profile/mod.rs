mod inmemory;
mod postgres;

pub use inmemory::InMemoryProfileRepo;
pub use postgres::PostgresProfileRepo;
use practice_alarm_domain::{Profile, ID};

#[async_trait::async_trait]
pub trait IProfileRepo: Send + Sync {
    /// Inserts the `Profile` or replaces the existing one for the `User`
    async fn save(&self, profile: &Profile) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<Profile>>;
}
