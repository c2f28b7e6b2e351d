use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use practice_alarm_domain::{
    Alarm, BrowserNotification, EmailTemplateParams, NotificationPermission, WorkerMessage, ID,
};
use practice_alarm_infra::{
    AlarmContext, Config, EmailConfig, FixedSys, IAlarmRepo, IEmailSender, IForegroundNotifier,
    INotificationWorker, InMemoryAlarmRepo,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<EmailTemplateParams>>,
    pub fail: bool,
}

impl RecordingEmailSender {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailTemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IEmailSender for RecordingEmailSender {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        params: &EmailTemplateParams,
    ) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow::anyhow!("Email api is down"));
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingWorker {
    pub messages: Mutex<Vec<WorkerMessage>>,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl RecordingWorker {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Takes `delay` to accept every message
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<WorkerMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl INotificationWorker for RecordingWorker {
    async fn post_message(&self, message: &WorkerMessage) -> anyhow::Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(anyhow::anyhow!("Worker is gone"));
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingForegroundNotifier {
    pub shown: Mutex<Vec<BrowserNotification>>,
}

impl RecordingForegroundNotifier {
    pub fn shown(&self) -> Vec<BrowserNotification> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IForegroundNotifier for RecordingForegroundNotifier {
    async fn show(&self, notification: &BrowserNotification) -> anyhow::Result<()> {
        self.shown.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// In-memory alarm store that can be told to fail fetching active alarms
/// or stamping one specific `Alarm`
#[derive(Default)]
pub struct FlakyAlarmRepo {
    inner: InMemoryAlarmRepo,
    pub fail_fetch: AtomicBool,
    pub fail_stamp_for: Mutex<Option<ID>>,
}

impl FlakyAlarmRepo {
    fn check_stamp(&self, alarm_id: &ID) -> anyhow::Result<()> {
        if self.fail_stamp_for.lock().unwrap().as_ref() == Some(alarm_id) {
            return Err(anyhow::anyhow!("Connection reset"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IAlarmRepo for FlakyAlarmRepo {
    async fn insert(&self, alarm: &Alarm) -> anyhow::Result<()> {
        self.inner.insert(alarm).await
    }

    async fn save(&self, alarm: &Alarm) -> anyhow::Result<()> {
        self.inner.save(alarm).await
    }

    async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
        self.inner.delete(alarm_id).await
    }

    async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
        self.inner.find(alarm_id).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        self.inner.find_by_user(user_id).await
    }

    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Connection reset"));
        }
        self.inner.find_active_by_user(user_id).await
    }

    async fn find_by_user_and_id(
        &self,
        user_id: &ID,
        alarm_id: &ID,
    ) -> anyhow::Result<Option<Alarm>> {
        self.inner.find_by_user_and_id(user_id, alarm_id).await
    }

    async fn set_last_triggered(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        self.check_stamp(alarm_id)?;
        self.inner.set_last_triggered(alarm_id, at).await
    }

    async fn set_last_attempted(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        self.check_stamp(alarm_id)?;
        self.inner.set_last_attempted(alarm_id, at).await
    }
}

/// Monday 2024-01-01 in UTC+02:00
pub fn monday_at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
        .unwrap()
}

pub struct TestContext {
    pub ctx: AlarmContext,
    pub sys: Arc<FixedSys>,
    pub email: Arc<RecordingEmailSender>,
    pub worker: Arc<RecordingWorker>,
    pub foreground: Arc<RecordingForegroundNotifier>,
}

impl TestContext {
    /// In-memory context with granted notification permission, configured
    /// email api and a registered background worker. The clock is set to
    /// Monday 09:00.
    pub fn new() -> Self {
        Self::with_doubles(RecordingEmailSender::default(), RecordingWorker::default())
    }

    pub fn with_doubles(email: RecordingEmailSender, worker: RecordingWorker) -> Self {
        let config = Config {
            email: EmailConfig {
                service_id: Some("service_1".into()),
                template_id: Some("template_1".into()),
                public_key: Some("public_key".into()),
            },
            notification_permission: NotificationPermission::Granted,
            ..Config::default()
        };
        let mut ctx = AlarmContext::create_inmemory(config);

        let sys = Arc::new(FixedSys::new(monday_at(9, 0)));
        let email = Arc::new(email);
        let worker = Arc::new(worker);
        let foreground = Arc::new(RecordingForegroundNotifier::default());
        ctx.sys = sys.clone();
        ctx.services.email = email.clone();
        ctx.services.notification_worker = Some(worker.clone() as Arc<dyn INotificationWorker>);
        ctx.services.foreground_notifier = foreground.clone();

        Self {
            ctx,
            sys,
            email,
            worker,
            foreground,
        }
    }

    /// Swaps the alarm store for a `FlakyAlarmRepo`
    pub fn with_flaky_alarms(mut self) -> (Self, Arc<FlakyAlarmRepo>) {
        let alarms = Arc::new(FlakyAlarmRepo::default());
        self.ctx.repos.alarms = alarms.clone();
        (self, alarms)
    }
}
