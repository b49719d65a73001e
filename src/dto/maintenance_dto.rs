use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance_log::MaintenanceLog;
use crate::services::due_status::DueStatus;
use crate::services::task_catalog::TaskDefinition;

/// Request para registrar un servicio realizado.
/// La fecha llega como string YYYY-MM-DD y se parsea en el controller:
/// el calculador nunca ve datos sin validar.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub task_key: String,

    #[validate(length(min = 10, max = 10))]
    pub date: String,

    #[validate(range(min = 0))]
    pub odometer_km: i64,

    #[validate(length(max = 200))]
    pub notes: Option<String>,
}

/// Response de un registro de mantenimiento
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub task_key: String,
    pub date: NaiveDate,
    pub odometer_km: i64,
    pub notes: Option<String>,
}

impl From<MaintenanceLog> for LogResponse {
    fn from(log: MaintenanceLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            task_key: log.task_key,
            date: log.date,
            odometer_km: log.odometer_km,
            notes: log.notes,
        }
    }
}

/// Entrada del historial global con el vehículo resuelto
#[derive(Debug, Serialize)]
pub struct HistoryItemResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub odometer_km: i64,
    pub task_key: String,
    pub title: String,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub sub_type: Option<String>,
}

/// Estado calculado de una tarea para el panel
#[derive(Debug, Serialize)]
pub struct TaskStatusResponse {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
    pub bg: String,
    /// Km o días restantes; negativo = vencido; null sin historial
    pub remaining: Option<i64>,
    pub display_text: String,
}

impl TaskStatusResponse {
    pub fn new(task: &TaskDefinition, status: DueStatus) -> Self {
        Self {
            key: task.key.to_string(),
            title: task.title.to_string(),
            subtitle: task.subtitle.to_string(),
            icon: task.icon.to_string(),
            color: task.color.to_string(),
            bg: task.bg.to_string(),
            remaining: status.remaining,
            display_text: status.display_text,
        }
    }
}

/// Response del panel: vehículo + estado de todas sus tareas
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub vehicle: super::vehicle_dto::VehicleResponse,
    pub tasks: Vec<TaskStatusResponse>,
}
