use crate::{
    shared::{
        entity::{Entity, ID},
        recurrence::Recurrence,
    },
    time_of_day::ScheduledTime,
};
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// An `Alarm` is a recurring reminder for a `User` to practice a specific
/// problem at `scheduled_time` on every weekday in `recurrence`.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: ID,
    /// The `User` that owns this `Alarm`
    pub user_id: ID,
    pub problem_title: String,
    pub problem_url: String,
    /// Opaque label like "Easy" or "Hard", only used for display and stats
    pub problem_difficulty: Option<String>,
    /// Local wall clock time the `Alarm` should fire at
    pub scheduled_time: ScheduledTime,
    pub recurrence: Recurrence,
    /// Inactive `Alarm`s are never evaluated by the poller
    pub is_active: bool,
    /// Last time a notification for this `Alarm` was delivered
    pub last_triggered: Option<DateTime<Utc>>,
    /// Last time this `Alarm` fired without any channel delivering it.
    /// Counts towards the once per calendar day ceiling like `last_triggered`.
    pub last_attempted: Option<DateTime<Utc>>,
    pub created: i64,
    pub updated: i64,
}

/// How late after the scheduled minute an `Alarm` is still allowed to fire.
///
/// A window never extends past midnight, and it never lifts the once per
/// day ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerWindow {
    pub grace_minutes: u32,
}

impl TriggerWindow {
    pub fn exact() -> Self {
        Self { grace_minutes: 0 }
    }

    pub fn new(grace_minutes: u32) -> Self {
        Self { grace_minutes }
    }

    pub fn contains(&self, scheduled: ScheduledTime, now: ScheduledTime) -> bool {
        let scheduled = scheduled.minutes_since_midnight();
        let now = now.minutes_since_midnight();
        now >= scheduled && now - scheduled <= self.grace_minutes
    }
}

impl Alarm {
    pub fn new(
        user_id: ID,
        problem_title: String,
        problem_url: String,
        scheduled_time: ScheduledTime,
        recurrence: Recurrence,
        now_millis: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            problem_title,
            problem_url,
            problem_difficulty: None,
            scheduled_time,
            recurrence,
            is_active: true,
            last_triggered: None,
            last_attempted: None,
            created: now_millis,
            updated: now_millis,
        }
    }

    /// Decides if this `Alarm` should fire at `now` when matching the
    /// scheduled minute exactly.
    pub fn should_trigger<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.should_trigger_within(now, TriggerWindow::exact())
    }

    /// Decides if this `Alarm` should fire at `now`. Everything is compared
    /// in the timezone of `now`.
    pub fn should_trigger_within<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        window: TriggerWindow,
    ) -> bool {
        if !window.contains(self.scheduled_time, ScheduledTime::from_time(now)) {
            return false;
        }

        if !self.recurrence.contains(now.weekday()) {
            return false;
        }

        !self.triggered_same_day_as(now) && !self.attempted_same_day_as(now)
    }

    /// Calendar date equality in the timezone of `now`, not a 24 hour window.
    pub fn triggered_same_day_as<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        same_local_day(self.last_triggered.as_ref(), now)
    }

    pub fn attempted_same_day_as<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        same_local_day(self.last_attempted.as_ref(), now)
    }

    pub fn mark_triggered(&mut self, at: DateTime<Utc>) {
        self.last_triggered = Some(at);
    }

    pub fn mark_attempted(&mut self, at: DateTime<Utc>) {
        self.last_attempted = Some(at);
    }
}

fn same_local_day<Tz: TimeZone>(at: Option<&DateTime<Utc>>, now: &DateTime<Tz>) -> bool {
    match at {
        Some(at) => at.with_timezone(&now.timezone()).date_naive() == now.date_naive(),
        None => false,
    }
}

impl Entity for Alarm {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Weekday};

    // Monday 2024-01-01 in UTC+02:00
    fn monday_at(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, hour, minute, second)
            .unwrap()
    }

    fn alarm(time: &str, days: &[Weekday]) -> Alarm {
        Alarm::new(
            ID::default(),
            "Two Sum".into(),
            "https://leetcode.com/problems/two-sum".into(),
            time.parse().unwrap(),
            Recurrence::new(days.iter().copied()),
            0,
        )
    }

    #[test]
    fn fires_once_per_day_on_matching_minute() {
        let mut alarm = alarm("09:00", &[Weekday::Mon]);

        assert!(alarm.should_trigger(&monday_at(9, 0, 0)));
        assert!(alarm.should_trigger(&monday_at(9, 0, 59)));
        assert!(!alarm.should_trigger(&monday_at(9, 1, 0)));
        assert!(!alarm.should_trigger(&monday_at(8, 59, 59)));

        alarm.mark_triggered(monday_at(9, 0, 5).with_timezone(&Utc));
        assert!(!alarm.should_trigger(&monday_at(9, 0, 0)));

        let next_monday = monday_at(9, 0, 0) + Duration::days(7);
        assert!(alarm.should_trigger(&next_monday));
    }

    #[test]
    fn does_not_refire_later_same_day() {
        let mut alarm = alarm("09:00", &[Weekday::Mon]);
        let fired_at = monday_at(9, 0, 0);
        alarm.mark_triggered(fired_at.with_timezone(&Utc));

        for later in [
            fired_at + Duration::minutes(1),
            fired_at + Duration::hours(1),
            monday_at(23, 59, 59),
        ] {
            assert!(alarm.triggered_same_day_as(&later));
            assert!(!alarm.should_trigger_within(&later, TriggerWindow::new(24 * 60)));
        }
    }

    #[test]
    fn failed_attempt_counts_towards_daily_ceiling() {
        let mut alarm = alarm("09:00", &[Weekday::Mon]);
        alarm.mark_attempted(monday_at(9, 0, 0).with_timezone(&Utc));

        assert!(alarm.attempted_same_day_as(&monday_at(9, 2, 0)));
        assert!(!alarm.should_trigger_within(&monday_at(9, 2, 0), TriggerWindow::new(5)));
        assert!(alarm.should_trigger(&(monday_at(9, 0, 0) + Duration::days(7))));
    }

    #[test]
    fn fires_again_the_next_day() {
        let mut alarm = alarm("09:00", &[Weekday::Mon, Weekday::Tue]);
        alarm.mark_triggered(monday_at(9, 0, 0).with_timezone(&Utc));

        let tuesday = monday_at(9, 0, 0) + Duration::days(1);
        assert!(alarm.should_trigger(&tuesday));
    }

    #[test]
    fn requires_weekday_in_recurrence() {
        let alarm = alarm("09:00", &[Weekday::Tue, Weekday::Sun]);
        assert!(!alarm.should_trigger(&monday_at(9, 0, 0)));

        let empty = self::alarm("09:00", &[]);
        assert!(!empty.should_trigger(&monday_at(9, 0, 0)));
    }

    #[test]
    fn compares_calendar_dates_in_local_time() {
        let mut alarm = alarm("01:00", &[Weekday::Mon]);
        // Sunday 23:30 UTC is already Monday 01:30 in UTC+02:00
        let sunday_utc = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
        alarm.mark_triggered(sunday_utc);
        assert!(!alarm.should_trigger(&monday_at(1, 0, 0)));

        // Sunday 21:59 UTC is Sunday 23:59 in UTC+02:00
        alarm.mark_triggered(Utc.with_ymd_and_hms(2023, 12, 31, 21, 59, 0).unwrap());
        assert!(alarm.should_trigger(&monday_at(1, 0, 0)));
    }

    #[test]
    fn grace_window_widens_match_but_stays_on_same_day() {
        let alarm = alarm("23:58", &[Weekday::Mon]);
        let window = TriggerWindow::new(5);
        assert!(alarm.should_trigger_within(&monday_at(23, 58, 0), window));
        assert!(alarm.should_trigger_within(&monday_at(23, 59, 30), window));
        assert!(!alarm.should_trigger_within(&monday_at(23, 57, 0), window));
        // Past midnight it is tuesday 00:01, which is before 23:58
        assert!(!alarm.should_trigger_within(&(monday_at(23, 58, 0) + Duration::minutes(3)), window));

        let window = TriggerWindow::new(2);
        assert!(window.contains("09:00".parse().unwrap(), "09:02".parse().unwrap()));
        assert!(!window.contains("09:00".parse().unwrap(), "09:03".parse().unwrap()));
    }
}
