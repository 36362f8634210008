use crate::models::trip::{Trip, TripExpense};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        description: String,
        start_odometer: f64,
        end_odometer: Option<f64>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        expenses: Vec<TripExpense>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, vehicle_id, description, start_odometer, end_odometer,
                               start_date, end_date, expenses, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(description)
        .bind(start_odometer)
        .bind(end_odometer)
        .bind(start_date)
        .bind(end_date)
        .bind(Json(expenses))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE vehicle_id = $1 ORDER BY start_date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Mayor odómetro final entre los viajes completados del vehículo
    pub async fn latest_completed_end_odometer(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<f64>, AppError> {
        let odometer: Option<f64> = sqlx::query_scalar(
            "SELECT MAX(end_odometer) FROM trips WHERE vehicle_id = $1 AND end_odometer IS NOT NULL",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(odometer)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        description: Option<String>,
        start_odometer: Option<f64>,
        end_odometer: Option<f64>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        expenses: Option<Vec<TripExpense>>,
    ) -> Result<Trip, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET description = $2, start_odometer = $3, end_odometer = $4,
                start_date = $5, end_date = $6, expenses = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(description.unwrap_or(current.description))
        .bind(start_odometer.unwrap_or(current.start_odometer))
        .bind(end_odometer.or(current.end_odometer))
        .bind(start_date.unwrap_or(current.start_date))
        .bind(end_date.or(current.end_date))
        .bind(Json(expenses.unwrap_or(current.expenses.0)))
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Viaje no encontrado".to_string()));
        }

        Ok(())
    }
}
