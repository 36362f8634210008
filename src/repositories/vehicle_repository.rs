use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        tank_capacity: Option<f64>,
        average_consumption: Option<f64>,
        purchase_price: Option<Decimal>,
        annual_insurance: Option<Decimal>,
        annual_patente: Option<Decimal>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, make, model, year, tank_capacity, average_consumption,
                                  purchase_price, annual_insurance, annual_patente, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(tank_capacity)
        .bind(average_consumption)
        .bind(purchase_price)
        .bind(annual_insurance)
        .bind(annual_patente)
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

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        tank_capacity: Option<f64>,
        average_consumption: Option<f64>,
        purchase_price: Option<Decimal>,
        annual_insurance: Option<Decimal>,
        annual_patente: Option<Decimal>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, make = $3, model = $4, year = $5, tank_capacity = $6,
                average_consumption = $7, purchase_price = $8, annual_insurance = $9,
                annual_patente = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(make.or(current.make))
        .bind(model.or(current.model))
        .bind(year.or(current.year))
        .bind(tank_capacity.or(current.tank_capacity))
        .bind(average_consumption.or(current.average_consumption))
        .bind(purchase_price.or(current.purchase_price))
        .bind(annual_insurance.or(current.annual_insurance))
        .bind(annual_patente.or(current.annual_patente))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
