use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::maintenance_dto::{DashboardResponse, TaskStatusResponse};
use crate::repositories::maintenance_log_repository::MaintenanceLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::due_status::{due_status, ServiceRecord};
use crate::services::task_catalog;
use crate::utils::errors::AppError;

pub struct DashboardController {
    vehicles: VehicleRepository,
    logs: MaintenanceLogRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            logs: MaintenanceLogRepository::new(pool),
        }
    }

    /// Panel de un vehículo: estado de vencimiento de todas las tareas de
    /// su catálogo, calculado sobre el historial completo del vehículo.
    pub async fn get_dashboard(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
    ) -> Result<DashboardResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este vehículo".to_string(),
            ));
        }

        let logs = self.logs.find_by_vehicle(vehicle.id).await?;

        // Agrupar el historial por tarea; el calculador recibe solo los
        // registros de la tarea que evalúa
        let mut history: HashMap<&str, Vec<ServiceRecord>> = HashMap::new();
        for log in &logs {
            history
                .entry(log.task_key.as_str())
                .or_default()
                .push(ServiceRecord {
                    date: log.date,
                    odometer_km: log.odometer_km,
                });
        }

        let today = Utc::now().date_naive();
        let empty: Vec<ServiceRecord> = Vec::new();

        let tasks = task_catalog::tasks_for(vehicle.vehicle_type())
            .iter()
            .map(|task| {
                let records = history.get(task.key).unwrap_or(&empty);
                let status = due_status(task, vehicle.odometer_km, records, today);
                TaskStatusResponse::new(task, status)
            })
            .collect();

        Ok(DashboardResponse {
            vehicle: vehicle.into(),
            tasks,
        })
    }
}
