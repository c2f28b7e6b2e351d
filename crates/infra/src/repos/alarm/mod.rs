mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryAlarmRepo;
pub use postgres::PostgresAlarmRepo;
use practice_alarm_domain::{Alarm, ID};

#[async_trait::async_trait]
pub trait IAlarmRepo: Send + Sync {
    async fn insert(&self, alarm: &Alarm) -> anyhow::Result<()>;
    async fn save(&self, alarm: &Alarm) -> anyhow::Result<()>;
    async fn delete(&self, alarm_id: &ID) -> Option<Alarm>;
    async fn find(&self, alarm_id: &ID) -> Option<Alarm>;
    /// All `Alarm`s of the `User`, newest first
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>>;
    /// Active `Alarm`s of the `User` in store order
    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>>;
    /// The `Alarm` if it exists and is owned by the `User`
    async fn find_by_user_and_id(&self, user_id: &ID, alarm_id: &ID)
        -> anyhow::Result<Option<Alarm>>;
    async fn set_last_triggered(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()>;
    async fn set_last_attempted(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()>;
}
