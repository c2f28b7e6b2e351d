use practice_alarm_domain::{
    AlarmFiring, BrowserNotification, ChannelFailure, ChannelOutcome, DispatchReport,
    EmailTemplateParams, NotificationPermission, WorkerMessage,
};
use practice_alarm_infra::{
    AlarmContext, EmailConfig, IEmailSender, IForegroundNotifier, INotificationPermission,
    INotificationWorker,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Fans an `AlarmFiring` out to the browser channel and the email channel.
///
/// The channels are independent of each other and best effort. A failing
/// channel is reported in the `DispatchReport`, it never fails the dispatch.
pub struct NotificationDispatcher {
    email_sender: Arc<dyn IEmailSender>,
    email_config: EmailConfig,
    notification_worker: Option<Arc<dyn INotificationWorker>>,
    foreground_notifier: Arc<dyn IForegroundNotifier>,
    notification_permission: Arc<dyn INotificationPermission>,
}

impl NotificationDispatcher {
    pub fn new(ctx: &AlarmContext) -> Self {
        Self {
            email_sender: ctx.services.email.clone(),
            email_config: ctx.config.email.clone(),
            notification_worker: ctx.services.notification_worker.clone(),
            foreground_notifier: ctx.services.foreground_notifier.clone(),
            notification_permission: ctx.services.notification_permission.clone(),
        }
    }

    pub async fn dispatch(&self, firing: &AlarmFiring) -> DispatchReport {
        let (browser, email) = futures::join!(
            self.browser_channel(firing),
            self.email_channel(firing)
        );
        let report = DispatchReport { browser, email };

        if let ChannelOutcome::Failed(failure) = &report.browser {
            warn!("Browser notification for {} failed: {}", firing.title, failure);
        }
        if let ChannelOutcome::Failed(failure) = &report.email {
            warn!("Email notification for {} failed: {}", firing.title, failure);
        }
        info!(
            "Dispatched notifications for {}. Browser: {:?}, email: {:?}",
            firing.title, report.browser, report.email
        );

        report
    }

    async fn browser_channel(&self, firing: &AlarmFiring) -> ChannelOutcome {
        if !firing.browser_enabled {
            return ChannelOutcome::Disabled;
        }

        let permission = self.notification_permission.permission();
        if permission != NotificationPermission::Granted {
            return ChannelOutcome::Failed(ChannelFailure::PermissionNotGranted(permission));
        }

        let notification = BrowserNotification::new(firing);
        let res = match &self.notification_worker {
            Some(worker) => {
                worker
                    .post_message(&WorkerMessage::ShowNotification(notification))
                    .await
            }
            None => self.foreground_notifier.show(&notification).await,
        };

        match res {
            Ok(_) => ChannelOutcome::Delivered,
            Err(e) => ChannelOutcome::Failed(ChannelFailure::Delivery(e.to_string())),
        }
    }

    async fn email_channel(&self, firing: &AlarmFiring) -> ChannelOutcome {
        if !firing.email_enabled {
            return ChannelOutcome::Disabled;
        }

        let (service_id, template_id) =
            match (&self.email_config.service_id, &self.email_config.template_id) {
                (Some(service_id), Some(template_id)) => (service_id, template_id),
                _ => return ChannelOutcome::Failed(ChannelFailure::MissingConfiguration),
            };
        if firing.recipient.trim().is_empty() {
            return ChannelOutcome::Failed(ChannelFailure::MissingRecipient);
        }

        let params = EmailTemplateParams::new(firing);
        match self
            .email_sender
            .send(service_id, template_id, &params)
            .await
        {
            Ok(_) => ChannelOutcome::Delivered,
            Err(e) => ChannelOutcome::Failed(ChannelFailure::Delivery(e.to_string())),
        }
    }
}
