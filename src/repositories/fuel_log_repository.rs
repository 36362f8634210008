use crate::models::fuel_log::FuelLog;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        odometer: f64,
        liters: f64,
        total_cost: Decimal,
        price_per_liter: Decimal,
        full_tank: bool,
        exchange_rate: Option<Decimal>,
        logged_at: NaiveDate,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO fuel_logs (id, vehicle_id, odometer, liters, total_cost, price_per_liter,
                                   full_tank, exchange_rate, logged_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(odometer)
        .bind(liters)
        .bind(total_cost)
        .bind(price_per_liter)
        .bind(full_tank)
        .bind(exchange_rate)
        .bind(logged_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FuelLog>, AppError> {
        let log = sqlx::query_as::<_, FuelLog>("SELECT * FROM fuel_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(log)
    }

    /// Cargas de un vehículo ordenadas por odómetro ascendente
    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            "SELECT * FROM fuel_logs WHERE vehicle_id = $1 ORDER BY odometer ASC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Mayor odómetro registrado en cargas del vehículo
    pub async fn latest_odometer(&self, vehicle_id: Uuid) -> Result<Option<f64>, AppError> {
        let odometer: Option<f64> =
            sqlx::query_scalar("SELECT MAX(odometer) FROM fuel_logs WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(odometer)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        odometer: Option<f64>,
        liters: Option<f64>,
        total_cost: Option<Decimal>,
        price_per_liter: Option<Decimal>,
        full_tank: Option<bool>,
        exchange_rate: Option<Decimal>,
        logged_at: Option<NaiveDate>,
    ) -> Result<FuelLog, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Carga de combustible no encontrada".to_string()))?;

        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            UPDATE fuel_logs
            SET odometer = $2, liters = $3, total_cost = $4, price_per_liter = $5,
                full_tank = $6, exchange_rate = $7, logged_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(odometer.unwrap_or(current.odometer))
        .bind(liters.unwrap_or(current.liters))
        .bind(total_cost.unwrap_or(current.total_cost))
        .bind(price_per_liter.unwrap_or(current.price_per_liter))
        .bind(full_tank.unwrap_or(current.full_tank))
        .bind(exchange_rate.or(current.exchange_rate))
        .bind(logged_at.unwrap_or(current.logged_at))
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fuel_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Carga de combustible no encontrada".to_string(),
            ));
        }

        Ok(())
    }
}
