use practice_alarm_domain::{BrowserNotification, WorkerMessage};
use reqwest::Client;
use tracing::{error, info};

pub const WORKER_KEY_HEADER: &str = "practice-alarm-worker-key";

/// Background delivery worker that shows notifications even when the
/// client that scheduled them is not in focus
#[async_trait::async_trait]
pub trait INotificationWorker: Send + Sync {
    async fn post_message(&self, message: &WorkerMessage) -> anyhow::Result<()>;
}

/// Shows a notification directly, used when no background worker is registered
#[async_trait::async_trait]
pub trait IForegroundNotifier: Send + Sync {
    async fn show(&self, notification: &BrowserNotification) -> anyhow::Result<()>;
}

/// Posts worker messages as json to a webhook endpoint
pub struct WebhookNotificationWorker {
    client: Client,
    url: String,
    key: String,
}

impl WebhookNotificationWorker {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            key,
        }
    }
}

#[async_trait::async_trait]
impl INotificationWorker for WebhookNotificationWorker {
    async fn post_message(&self, message: &WorkerMessage) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&self.url)
            .header(WORKER_KEY_HEADER, &self.key)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                error!("Error posting message to notification worker: {:?}", e);
                anyhow::Error::new(e)
            })?;

        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "Notification worker responded with status {}",
                res.status()
            ));
        }
        Ok(())
    }
}

/// Foreground notifier for headless hosts, the notification ends up in
/// the structured log
pub struct LogForegroundNotifier;

#[async_trait::async_trait]
impl IForegroundNotifier for LogForegroundNotifier {
    async fn show(&self, notification: &BrowserNotification) -> anyhow::Result<()> {
        info!(
            title = %notification.title,
            body = %notification.body,
            tag = %notification.tag,
            url = ?notification.data.url,
            "Showing notification"
        );
        Ok(())
    }
}
