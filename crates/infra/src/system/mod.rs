use chrono::{DateTime, FixedOffset, Local, Utc};
use std::sync::Mutex;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current wall clock time in the local timezone of the host
    fn now_local(&self) -> DateTime<FixedOffset>;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// System with a manually controlled clock
pub struct FixedSys {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedSys {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock().unwrap() = now;
    }
}

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now_local().timestamp_millis()
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap()
    }
}
