mod config;
mod repos;
mod services;
mod system;

pub use config::{is_valid_worker_url, Config, EmailConfig, NotificationWorkerConfig};
pub use repos::{IAlarmRepo, IProfileRepo, InMemoryAlarmRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::warn;

#[derive(Clone)]
pub struct AlarmContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub services: Services,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl AlarmContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                warn!("DATABASE_URL is not set, alarms and profiles are only kept in memory.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let services = Services::create(&config);
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            services,
        })
    }

    /// Context backed by in-memory repos, used by tests and local runs
    pub fn create_inmemory(config: Config) -> Self {
        let services = Services::create(&config);
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            services,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<AlarmContext> {
    AlarmContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .ok()
        .filter(|conn| !conn.is_empty())
}
