use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance_log::MaintenanceLog;
use crate::utils::errors::AppError;

pub struct MaintenanceLogRepository {
    pool: PgPool,
}

impl MaintenanceLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un registro. Los registros son inmutables: no hay update
    /// ni delete individual, solo el borrado en cascada del vehículo.
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        task_key: String,
        date: NaiveDate,
        odometer_km: i64,
        notes: Option<String>,
    ) -> Result<MaintenanceLog, AppError> {
        let id = Uuid::new_v4();

        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (id, user_id, vehicle_id, task_key, date, odometer_km, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(vehicle_id)
        .bind(task_key)
        .bind(date)
        .bind(odometer_km)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE vehicle_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn find_by_vehicle_and_task(
        &self,
        vehicle_id: Uuid,
        task_key: &str,
    ) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            SELECT * FROM maintenance_logs
            WHERE vehicle_id = $1 AND task_key = $2
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(task_key)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE user_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
