use super::IAlarmRepo;
use chrono::{DateTime, Utc};
use practice_alarm_domain::{Alarm, Recurrence, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresAlarmRepo {
    pool: PgPool,
}

impl PostgresAlarmRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AlarmRaw {
    alarm_uid: Uuid,
    user_uid: Uuid,
    problem_title: String,
    problem_url: String,
    problem_difficulty: Option<String>,
    scheduled_time: String,
    recurrence: Vec<String>,
    is_active: bool,
    last_triggered: Option<DateTime<Utc>>,
    last_attempted: Option<DateTime<Utc>>,
    created: i64,
    updated: i64,
}

impl TryFrom<AlarmRaw> for Alarm {
    type Error = anyhow::Error;

    fn try_from(raw: AlarmRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.alarm_uid.into(),
            user_id: raw.user_uid.into(),
            problem_title: raw.problem_title,
            problem_url: raw.problem_url,
            problem_difficulty: raw.problem_difficulty,
            scheduled_time: raw.scheduled_time.parse()?,
            recurrence: Recurrence::try_from(raw.recurrence)?,
            is_active: raw.is_active,
            last_triggered: raw.last_triggered,
            last_attempted: raw.last_attempted,
            created: raw.created,
            updated: raw.updated,
        })
    }
}

/// Rows that can not be parsed into an `Alarm` are logged and skipped so
/// that one bad row does not hide the others
fn into_alarms(rows: Vec<AlarmRaw>) -> Vec<Alarm> {
    rows.into_iter()
        .filter_map(|raw| {
            let alarm_uid = raw.alarm_uid;
            match Alarm::try_from(raw) {
                Ok(alarm) => Some(alarm),
                Err(e) => {
                    error!("Skipping malformed alarm row {}. Error: {:?}", alarm_uid, e);
                    None
                }
            }
        })
        .collect()
}

fn recurrence_names(alarm: &Alarm) -> Vec<String> {
    alarm
        .recurrence
        .day_names()
        .into_iter()
        .map(String::from)
        .collect()
}

#[async_trait::async_trait]
impl IAlarmRepo for PostgresAlarmRepo {
    async fn insert(&self, alarm: &Alarm) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO alarms
            (alarm_uid, user_uid, problem_title, problem_url, problem_difficulty,
             scheduled_time, recurrence, is_active, last_triggered, last_attempted,
             created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(alarm.id.inner_ref())
        .bind(alarm.user_id.inner_ref())
        .bind(&alarm.problem_title)
        .bind(&alarm.problem_url)
        .bind(&alarm.problem_difficulty)
        .bind(alarm.scheduled_time.to_string())
        .bind(recurrence_names(alarm))
        .bind(alarm.is_active)
        .bind(alarm.last_triggered)
        .bind(alarm.last_attempted)
        .bind(alarm.created)
        .bind(alarm.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, alarm: &Alarm) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE alarms
            SET problem_title = $2,
            problem_url = $3,
            problem_difficulty = $4,
            scheduled_time = $5,
            recurrence = $6,
            is_active = $7,
            last_triggered = $8,
            last_attempted = $9,
            updated = $10
            WHERE alarm_uid = $1
            "#,
        )
        .bind(alarm.id.inner_ref())
        .bind(&alarm.problem_title)
        .bind(&alarm.problem_url)
        .bind(&alarm.problem_difficulty)
        .bind(alarm.scheduled_time.to_string())
        .bind(recurrence_names(alarm))
        .bind(alarm.is_active)
        .bind(alarm.last_triggered)
        .bind(alarm.last_attempted)
        .bind(alarm.updated)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm.id));
        }
        Ok(())
    }

    async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
        match sqlx::query_as::<_, AlarmRaw>(
            r#"
            DELETE FROM alarms AS a
            WHERE a.alarm_uid = $1
            RETURNING *
            "#,
        )
        .bind(alarm_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(alarm) => alarm.and_then(|a| a.try_into().ok()),
            Err(e) => {
                error!("Unable to delete alarm: {}. Error: {:?}", alarm_id, e);
                None
            }
        }
    }

    async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
        match sqlx::query_as::<_, AlarmRaw>(
            r#"
            SELECT * FROM alarms AS a
            WHERE a.alarm_uid = $1
            "#,
        )
        .bind(alarm_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(alarm) => alarm.and_then(|a| a.try_into().ok()),
            Err(e) => {
                error!("Unable to find alarm: {}. Error: {:?}", alarm_id, e);
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        let alarms = sqlx::query_as::<_, AlarmRaw>(
            r#"
            SELECT * FROM alarms AS a
            WHERE a.user_uid = $1
            ORDER BY a.created DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(into_alarms(alarms))
    }

    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Alarm>> {
        let alarms = sqlx::query_as::<_, AlarmRaw>(
            r#"
            SELECT * FROM alarms AS a
            WHERE a.user_uid = $1 AND
            a.is_active = TRUE
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(into_alarms(alarms))
    }

    async fn find_by_user_and_id(
        &self,
        user_id: &ID,
        alarm_id: &ID,
    ) -> anyhow::Result<Option<Alarm>> {
        let alarm = sqlx::query_as::<_, AlarmRaw>(
            r#"
            SELECT * FROM alarms AS a
            WHERE a.alarm_uid = $1 AND
            a.user_uid = $2
            "#,
        )
        .bind(alarm_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        alarm.map(Alarm::try_from).transpose()
    }

    async fn set_last_triggered(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE alarms
            SET last_triggered = $2
            WHERE alarm_uid = $1
            "#,
        )
        .bind(alarm_id.inner_ref())
        .bind(at)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm_id));
        }
        Ok(())
    }

    async fn set_last_attempted(&self, alarm_id: &ID, at: DateTime<Utc>) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE alarms
            SET last_attempted = $2
            WHERE alarm_uid = $1
            "#,
        )
        .bind(alarm_id.inner_ref())
        .bind(at)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(anyhow::anyhow!("Alarm with id: {} does not exist", alarm_id));
        }
        Ok(())
    }
}
