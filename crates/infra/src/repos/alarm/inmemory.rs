use super::IAlarmRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use practice_alarm_domain::{Alarm, ID};

pub struct InMemoryAlarmRepo {
    alarms: std::sync::Mutex<Vec<Alarm>>,
}

impl InMemoryAlarmRepo {
    pub fn new() -> Self {
        Self {
            alarms: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryAlarmRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAlarmRepo for InMemoryAlarmRepo {
    async fn insert(&self, alarm: &Alarm) -> anyhow::Result<()> {
        insert(alarm, &self.alarms);
        Ok(())
    }

    async fn save(&self, alarm: &Alarm) -> anyhow::Result<()> {
        if !save(alarm, &self.alarms) {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm.id));
        }
        Ok(())
    }

    async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
        delete(alarm_id, &self.alarms)
    }

    async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
        find(alarm_id, &self.alarms)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        let mut alarms = find_by(&self.alarms, |a| a.user_id == *user_id);
        // Newest first, later inserts win ties
        alarms.reverse();
        alarms.sort_by(|a1, a2| a2.created.cmp(&a1.created));
        Ok(alarms)
    }

    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        Ok(find_by(&self.alarms, |a| a.user_id == *user_id && a.is_active))
    }

    async fn find_by_user_and_id(
        &self,
        user_id: &ID,
        alarm_id: &ID,
    ) -> anyhow::Result<Option<Alarm>> {
        Ok(find(alarm_id, &self.alarms).filter(|a| a.user_id == *user_id))
    }

    async fn set_last_triggered(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        let updated = update_many(
            &self.alarms,
            |a| a.id == *alarm_id,
            |a| a.last_triggered = Some(at),
        );
        if updated == 0 {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm_id));
        }
        Ok(())
    }

    async fn set_last_attempted(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        let updated = update_many(
            &self.alarms,
            |a| a.id == *alarm_id,
            |a| a.last_attempted = Some(at),
        );
        if updated == 0 {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm_id));
        }
        Ok(())
    }
}
