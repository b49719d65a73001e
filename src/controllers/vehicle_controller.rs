use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateOdometerRequest, UpdateVehicleRequest, VehicleResponse,
};
use crate::models::profile::FREE_VEHICLES_LIMIT;
use crate::models::vehicle::VehicleType;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    profiles: ProfileRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle_type = VehicleType::parse(&request.vehicle_type).ok_or_else(|| {
            AppError::BadRequest("Tipo de vehículo inválido: usa 'car' o 'moto'".to_string())
        })?;

        // Verificar el límite de vehículos del plan antes de crear
        let limit = self
            .profiles
            .find_by_user(user_id)
            .await?
            .map(|p| p.vehicles_limit)
            .unwrap_or(FREE_VEHICLES_LIMIT);

        let count = self.repository.count_by_user(user_id).await?;
        if count >= limit as i64 {
            return Err(AppError::Forbidden(format!(
                "Límite de {} vehículos alcanzado. Mejora tu plan para añadir más.",
                limit
            )));
        }

        let vehicle = self
            .repository
            .create(
                user_id,
                vehicle_type.as_str().to_string(),
                request.make,
                request.model,
                request.odometer_km,
            )
            .await?;

        log::info!("🚗 Vehículo creado: {} ({})", vehicle.id, vehicle.vehicle_type);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Verificar que pertenece al usuario
        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este vehículo".to_string(),
            ));
        }

        Ok(vehicle.into())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(id, user_id, request.make, request.model, request.odometer_km)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Actualizar solo el kilometraje. No se valida monotonía: el usuario
    /// puede corregir a la baja un valor mal introducido.
    pub async fn update_odometer(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateOdometerRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este vehículo".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .update_odometer(id, request.odometer_km)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Kilometraje actualizado".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, user_id).await?;
        log::info!("🗑️ Vehículo eliminado: {}", id);
        Ok(())
    }
}
