use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_dto::ApiResponse;
use crate::dto::stats_dto::VehicleStatsResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::stats_service;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    fuel_logs: FuelLogRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            fuel_logs: FuelLogRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .create(
                request.name,
                request.make,
                request.model,
                request.year,
                request.tank_capacity,
                request.average_consumption,
                request.purchase_price,
                request.annual_insurance,
                request.annual_patente,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.make,
                request.model,
                request.year,
                request.tank_capacity,
                request.average_consumption,
                request.purchase_price,
                request.annual_insurance,
                request.annual_patente,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Estadísticas de consumo y costos derivadas del historial de cargas.
    /// Toda la aritmética vive en stats_service.
    pub async fn stats(&self, id: Uuid) -> Result<VehicleStatsResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let logs = self.fuel_logs.find_by_vehicle(id).await?;

        Ok(VehicleStatsResponse {
            vehicle_id: vehicle.id,
            fuel_log_count: logs.len(),
            total_distance: stats_service::total_distance(&logs),
            total_liters: stats_service::total_liters(&logs),
            total_fuel_cost: stats_service::total_fuel_cost(&logs),
            average_consumption: stats_service::average_consumption(&logs),
            average_price_per_liter: stats_service::average_price_per_liter(&logs),
            cost_per_km: stats_service::cost_per_km(&logs),
            amortized_cost_per_km: stats_service::amortized_cost_per_km(&vehicle, &logs),
        })
    }
}
