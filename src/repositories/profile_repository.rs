use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{Profile, FREE_VEHICLES_LIMIT};
use crate::utils::errors::AppError;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear el perfil gratuito asociado a una cuenta nueva
    pub async fn create_default(&self, user_id: Uuid) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, plan, vehicles_limit, stripe_customer_id, created_at)
            VALUES ($1, 'free', $2, NULL, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(FREE_VEHICLES_LIMIT)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    /// Subir el plan tras un pago confirmado por el webhook
    pub async fn upgrade_plan(
        &self,
        user_id: Uuid,
        plan: &str,
        vehicles_limit: i32,
        stripe_customer_id: Option<String>,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET plan = $2, vehicles_limit = $3,
                stripe_customer_id = COALESCE($4, stripe_customer_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(plan)
        .bind(vehicles_limit)
        .bind(stripe_customer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }
}
