use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_type: String,
        make: String,
        model: String,
        odometer_km: i64,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, user_id, vehicle_type, make, model, odometer_km, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(vehicle_type)
        .bind(make)
        .bind(model)
        .bind(odometer_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        make: Option<String>,
        model: Option<String>,
        odometer_km: Option<i64>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Verificar que pertenece al usuario
        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a este usuario".to_string(),
            ));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, odometer_km = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(odometer_km.unwrap_or(current.odometer_km))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Fijar el kilometraje actual (modal de actualización de Km)
    pub async fn update_odometer(&self, id: Uuid, odometer_km: i64) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET odometer_km = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(odometer_km)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Subir el kilometraje solo si el nuevo valor es mayor que el actual.
    /// Se usa al registrar un servicio con más km que el vehículo.
    pub async fn raise_odometer_if_higher(
        &self,
        id: Uuid,
        odometer_km: i64,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET odometer_km = $2 WHERE id = $1 AND odometer_km < $2")
            .bind(id)
            .bind(odometer_km)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece al usuario
        let vehicle = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a este usuario".to_string(),
            ));
        }

        // Los logs asociados caen por ON DELETE CASCADE
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
