use practice_alarm_domain::NotificationPermission;
use practice_alarm_utils::create_random_secret;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};

const SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Seconds between two checks of the signed in user's alarms
    pub poll_interval_secs: u64,
    /// Minutes after the scheduled minute an alarm is still allowed to fire.
    /// Zero means the scheduled minute has to match exactly.
    pub grace_minutes: u32,
    /// Secret used to verify the HS256 session tokens
    pub session_jwt_secret: String,
    /// Session token to sign in with when the application starts
    pub session_token: Option<String>,
    pub email: EmailConfig,
    /// Background worker that receives the browser notifications, if one
    /// is registered
    pub notification_worker: Option<NotificationWorkerConfig>,
    /// Notification permission assumed until the user agent reports one
    pub notification_permission: NotificationPermission,
}

/// Identifiers for the third party transactional email api
#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationWorkerConfig {
    pub url: String,
    /// Sent along every message so that the worker can verify the sender
    pub key: String,
}

impl Config {
    pub fn new() -> Self {
        let session_jwt_secret = match std::env::var("SESSION_JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find SESSION_JWT_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(SECRET_LEN);
                info!(
                    "Secret for verifying session tokens was generated and set to: {}",
                    secret
                );
                secret
            }
        };

        Self {
            port: parse_env_or("PORT", 5000),
            poll_interval_secs: parse_env_or("ALARM_POLL_INTERVAL_SECS", 60),
            grace_minutes: parse_env_or("ALARM_GRACE_MINUTES", 0),
            session_jwt_secret,
            session_token: non_empty_env("SESSION_TOKEN"),
            email: EmailConfig {
                service_id: non_empty_env("EMAILJS_SERVICE_ID"),
                template_id: non_empty_env("EMAILJS_TEMPLATE_ID"),
                public_key: non_empty_env("EMAILJS_PUBLIC_KEY"),
            },
            notification_worker: notification_worker_from_env(),
            notification_permission: parse_env_or(
                "NOTIFICATION_PERMISSION",
                NotificationPermission::Default,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|val| !val.trim().is_empty())
}

fn parse_env_or<T: FromStr + Display>(name: &str, default: T) -> T {
    match non_empty_env(name) {
        None => default,
        Some(val) => match val.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, val, default
                );
                default
            }
        },
    }
}

fn notification_worker_from_env() -> Option<NotificationWorkerConfig> {
    let url = non_empty_env("NOTIFICATION_WORKER_URL")?;
    if !is_valid_worker_url(&url) {
        warn!(
            "The given NOTIFICATION_WORKER_URL: {} is not a valid http(s) url, notifications will be shown in the foreground.",
            url
        );
        return None;
    }
    let key = match non_empty_env("NOTIFICATION_WORKER_KEY") {
        Some(key) => key,
        None => {
            let key = create_random_secret(SECRET_LEN);
            info!(
                "Did not find NOTIFICATION_WORKER_KEY environment variable. Generated worker key: {}",
                key
            );
            key
        }
    };
    Some(NotificationWorkerConfig { url, key })
}

pub fn is_valid_worker_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed_url) => ["https", "http"].contains(&parsed_url.scheme()),
        Err(_) => false,
    }
}
