//! Modelo de Profile
//!
//! Perfil de cuenta con el plan contratado y el límite de vehículos.
//! El webhook de pago actualiza plan y límite según el pack comprado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Límite de vehículos del plan gratuito
pub const FREE_VEHICLES_LIMIT: i32 = 1;

/// Profile - mapea exactamente a la tabla profiles (id = users.id)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub plan: String,
    pub vehicles_limit: i32,
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
