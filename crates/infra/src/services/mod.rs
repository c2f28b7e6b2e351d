mod email;
mod notifier;
mod session;

use crate::config::Config;
pub use email::{EmailJsApi, IEmailSender};
pub use notifier::{
    IForegroundNotifier, INotificationWorker, LogForegroundNotifier, WebhookNotificationWorker,
    WORKER_KEY_HEADER,
};
pub use session::{
    INotificationPermission, ISessionStore, InMemoryNotificationPermission, InMemorySessionStore,
};
use std::sync::Arc;

/// External collaborators used to deliver notifications and keep track
/// of the signed in `User`
#[derive(Clone)]
pub struct Services {
    pub email: Arc<dyn IEmailSender>,
    /// `None` when no background worker is registered
    pub notification_worker: Option<Arc<dyn INotificationWorker>>,
    pub foreground_notifier: Arc<dyn IForegroundNotifier>,
    pub notification_permission: Arc<dyn INotificationPermission>,
    pub sessions: Arc<dyn ISessionStore>,
}

impl Services {
    pub fn create(config: &Config) -> Self {
        let notification_worker = config.notification_worker.as_ref().map(|worker| {
            Arc::new(WebhookNotificationWorker::new(
                worker.url.clone(),
                worker.key.clone(),
            )) as Arc<dyn INotificationWorker>
        });

        Self {
            email: Arc::new(EmailJsApi::new(config.email.public_key.clone())),
            notification_worker,
            foreground_notifier: Arc::new(LogForegroundNotifier),
            notification_permission: Arc::new(InMemoryNotificationPermission::new(
                config.notification_permission,
            )),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}
