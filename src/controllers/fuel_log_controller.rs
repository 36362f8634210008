use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_dto::ApiResponse;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, FuelLogResponse, UpdateFuelLogRequest};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::stats_service;
use crate::utils::errors::AppError;

pub struct FuelLogController {
    repository: FuelLogRepository,
    vehicles: VehicleRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelLogRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate()?;

        // Verificar que el vehículo exista
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Derivar precio por litro si no vino en el request
        let price_per_liter = match request.price_per_liter {
            Some(price) => price,
            None => {
                let liters = Decimal::from_f64_retain(request.liters).ok_or_else(|| {
                    AppError::BadRequest("Cantidad de litros inválida".to_string())
                })?;
                request.total_cost / liters
            }
        };

        let log = self
            .repository
            .create(
                request.vehicle_id,
                request.odometer,
                request.liters,
                request.total_cost,
                price_per_liter,
                request.full_tank,
                request.exchange_rate,
                request.logged_at,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Carga de combustible registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<FuelLogResponse, AppError> {
        let log = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Carga de combustible no encontrada".to_string()))?;

        Ok(log.into())
    }

    /// Historial de cargas de un vehículo ordenado por odómetro, con el
    /// consumo de cada tramo anotado por el servicio de estadísticas.
    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<FuelLogResponse>, AppError> {
        let logs = self.repository.find_by_vehicle(vehicle_id).await?;

        let mut responses = Vec::with_capacity(logs.len());
        for (index, log) in logs.iter().enumerate() {
            let consumption = if index > 0 {
                stats_service::consumption_between(&logs[index - 1], log)
            } else {
                None
            };
            let mut response = FuelLogResponse::from(log.clone());
            response.consumption = consumption;
            responses.push(response);
        }

        Ok(responses)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate()?;

        let log = self
            .repository
            .update(
                id,
                request.odometer,
                request.liters,
                request.total_cost,
                request.price_per_liter,
                request.full_tank,
                request.exchange_rate,
                request.logged_at,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Carga de combustible actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
