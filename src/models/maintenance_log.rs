//! Modelo de MaintenanceLog
//!
//! Registro inmutable de una tarea de mantenimiento realizada sobre un
//! vehículo. Las filas se crean una vez y nunca se modifican; el historial
//! se consulta ordenado por fecha descendente.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// MaintenanceLog - mapea exactamente a la tabla maintenance_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub task_key: String,
    pub date: NaiveDate,
    pub odometer_km: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
