mod alarm;
mod profile;
mod shared;

pub use alarm::{IAlarmRepo, InMemoryAlarmRepo, PostgresAlarmRepo};
pub use profile::{IProfileRepo, InMemoryProfileRepo, PostgresProfileRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub alarms: Arc<dyn IAlarmRepo>,
    pub profiles: Arc<dyn IProfileRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            alarms: Arc::new(PostgresAlarmRepo::new(pool.clone())),
            profiles: Arc::new(PostgresProfileRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            alarms: Arc::new(InMemoryAlarmRepo::new()),
            profiles: Arc::new(InMemoryProfileRepo::new()),
        }
    }
}
