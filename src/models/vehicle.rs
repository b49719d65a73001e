//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y el tipo de vehículo.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de vehículo - determina el catálogo de tareas aplicable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Moto,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Moto => "moto",
        }
    }

    /// Parsear desde el valor almacenado en la columna vehicle_type
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "car" => Some(VehicleType::Car),
            "moto" => Some(VehicleType::Moto),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub odometer_km: i64,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Tipo de vehículo como enum; los valores inválidos en BD caen a 'car'
    /// para que una fila corrupta no rompa el catálogo.
    pub fn vehicle_type(&self) -> VehicleType {
        VehicleType::parse(&self.vehicle_type).unwrap_or(VehicleType::Car)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_roundtrip() {
        assert_eq!(VehicleType::parse("car"), Some(VehicleType::Car));
        assert_eq!(VehicleType::parse("moto"), Some(VehicleType::Moto));
        assert_eq!(VehicleType::parse("camion"), None);
        assert_eq!(VehicleType::Moto.as_str(), "moto");
    }
}
