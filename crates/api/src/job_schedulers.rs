use crate::{alarm::check_alarms::CheckAlarmsUseCase, shared::usecase::execute};
use practice_alarm_infra::AlarmContext;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::info;

struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Checks the alarms of the signed in `User` right after it is started
/// and then once every period.
///
/// Ticks run one after another on a single task, a tick in flight when the
/// poller is stopped runs to completion.
pub struct AlarmPoller {
    ctx: AlarmContext,
    period: Duration,
    handle: Mutex<Option<PollerHandle>>,
    ticks: Arc<AtomicU64>,
}

impl AlarmPoller {
    pub fn new(ctx: AlarmContext) -> Self {
        let period = Duration::from_secs(ctx.config.poll_interval_secs.max(1));
        Self::with_period(ctx, period)
    }

    pub fn with_period(ctx: AlarmContext, period: Duration) -> Self {
        Self {
            ctx,
            period,
            handle: Mutex::new(None),
            ticks: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns false when the poller was already running
    pub fn start(&self) -> bool {
        let mut handle = self.handle.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(running) = handle.as_ref() {
            if !running.task.is_finished() {
                return false;
            }
        }

        let cancel = CancellationToken::new();
        let task = actix_web::rt::spawn(run_alarm_checks(
            self.ctx.clone(),
            self.period,
            cancel.clone(),
            self.ticks.clone(),
        ));
        *handle = Some(PollerHandle { cancel, task });
        info!("Alarm poller started, checking every {:?}", self.period);

        true
    }

    /// Returns false when the poller was not running
    pub fn stop(&self) -> bool {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        match handle {
            Some(handle) => {
                handle.cancel.cancel();
                info!("Alarm poller stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|handle| !handle.task.is_finished())
            .unwrap_or(false)
    }

    /// Number of ticks run since the poller was created
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Drop for AlarmPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_alarm_checks(
    ctx: AlarmContext,
    period: Duration,
    cancel: CancellationToken,
    ticks: Arc<AtomicU64>,
) {
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {}
        }

        ticks.fetch_add(1, Ordering::SeqCst);
        // Errors are logged by `execute`, the next tick tries again
        let _ = execute(CheckAlarmsUseCase {}, &ctx).await;
    }
}
