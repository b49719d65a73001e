use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    /// "car" o "moto"
    #[validate(length(min = 3, max = 4))]
    pub vehicle_type: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 0))]
    pub odometer_km: i64,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 0))]
    pub odometer_km: Option<i64>,
}

/// Request para actualizar solo el kilometraje (modal de Km del cliente)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOdometerRequest {
    #[validate(range(min = 0))]
    pub odometer_km: i64,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub odometer_km: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_type: vehicle.vehicle_type,
            make: vehicle.make,
            model: vehicle.model,
            odometer_km: vehicle.odometer_km,
            created_at: vehicle.created_at,
        }
    }
}
