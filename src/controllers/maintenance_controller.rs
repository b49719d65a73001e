use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateLogRequest, HistoryItemResponse, LogResponse};
use crate::models::vehicle::Vehicle;
use crate::repositories::maintenance_log_repository::MaintenanceLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::task_catalog;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct MaintenanceController {
    logs: MaintenanceLogRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            logs: MaintenanceLogRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Registrar un servicio realizado. Si el kilometraje del registro
    /// supera el del vehículo, el cuentakilómetros del vehículo se sube
    /// hasta ese valor; nunca baja.
    pub async fn create_log(
        &self,
        user_id: Uuid,
        request: CreateLogRequest,
    ) -> Result<ApiResponse<LogResponse>, AppError> {
        request.validate()?;

        // La fecha se parsea aquí: la lógica de dominio nunca ve strings
        let date = validate_date(&request.date).map_err(|_| {
            AppError::BadRequest("Fecha inválida: usa el formato YYYY-MM-DD".to_string())
        })?;

        let vehicle = self.owned_vehicle(request.vehicle_id, user_id).await?;

        // La tarea debe existir en el catálogo del tipo de vehículo
        if task_catalog::find_task(vehicle.vehicle_type(), &request.task_key).is_none() {
            return Err(AppError::BadRequest(format!(
                "Tarea '{}' desconocida para este tipo de vehículo",
                request.task_key
            )));
        }

        let notes = request.notes.filter(|n| !n.trim().is_empty());

        let log = self
            .logs
            .create(
                user_id,
                vehicle.id,
                request.task_key,
                date,
                request.odometer_km,
                notes,
            )
            .await?;

        self.vehicles
            .raise_odometer_if_higher(vehicle.id, request.odometer_km)
            .await?;

        log::info!(
            "🔧 Servicio registrado: {} en vehículo {} ({} km)",
            log.task_key,
            vehicle.id,
            log.odometer_km
        );

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Registro guardado exitosamente".to_string(),
        ))
    }

    /// Historial de un vehículo, opcionalmente filtrado por tarea,
    /// ordenado por fecha descendente
    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
        task_key: Option<String>,
    ) -> Result<Vec<LogResponse>, AppError> {
        let vehicle = self.owned_vehicle(vehicle_id, user_id).await?;

        let logs = match task_key {
            Some(key) => {
                self.logs
                    .find_by_vehicle_and_task(vehicle.id, &key)
                    .await?
            }
            None => self.logs.find_by_vehicle(vehicle.id).await?,
        };

        Ok(logs.into_iter().map(LogResponse::from).collect())
    }

    /// Historial global del usuario con los vehículos resueltos,
    /// ordenado por fecha descendente
    pub async fn history(&self, user_id: Uuid) -> Result<Vec<HistoryItemResponse>, AppError> {
        let (logs, vehicles) = tokio::try_join!(
            self.logs.find_by_user(user_id),
            self.vehicles.find_by_user(user_id)
        )?;

        let items = logs
            .into_iter()
            .map(|log| {
                let vehicle = vehicles.iter().find(|v| v.id == log.vehicle_id);
                let title = task_catalog::history_title(&log.task_key, log.notes.as_deref());

                HistoryItemResponse {
                    id: log.id,
                    date: log.date,
                    odometer_km: log.odometer_km,
                    task_key: log.task_key,
                    title,
                    vehicle_name: vehicle
                        .map(|v| format!("{} {}", v.make, v.model))
                        .unwrap_or_else(|| "Vehículo desconocido".to_string()),
                    vehicle_type: vehicle
                        .map(|v| v.vehicle_type.clone())
                        .unwrap_or_else(|| "car".to_string()),
                    sub_type: log.notes,
                }
            })
            .collect();

        Ok(items)
    }

    async fn owned_vehicle(&self, vehicle_id: Uuid, user_id: Uuid) -> Result<Vehicle, AppError> {
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

        Ok(vehicle)
    }
}
