use super::IProfileRepo;
use practice_alarm_domain::{Profile, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresProfileRepo {
    pool: PgPool,
}

impl PostgresProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRaw {
    user_uid: Uuid,
    email: Option<String>,
}

impl From<ProfileRaw> for Profile {
    fn from(raw: ProfileRaw) -> Self {
        Self {
            user_id: raw.user_uid.into(),
            email: raw.email,
        }
    }
}

#[async_trait::async_trait]
impl IProfileRepo for PostgresProfileRepo {
    async fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles(user_uid, email)
            VALUES($1, $2)
            ON CONFLICT (user_uid) DO UPDATE
            SET email = EXCLUDED.email
            "#,
        )
        .bind(profile.user_id.inner_ref())
        .bind(&profile.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, ProfileRaw>(
            r#"
            SELECT * FROM profiles AS p
            WHERE p.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile.map(Profile::from))
    }
}
