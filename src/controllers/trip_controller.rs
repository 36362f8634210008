use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api_dto::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripCostResponse, TripResponse, UpdateTripRequest};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::stats_service;
use crate::utils::errors::{bad_request_error, AppError};

pub struct TripController {
    repository: TripRepository,
    vehicles: VehicleRepository,
    fuel_logs: FuelLogRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            fuel_logs: FuelLogRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Chequeo blando: el odómetro final no puede preceder al inicial
        if let Some(end) = request.end_odometer {
            if end < request.start_odometer {
                return Err(bad_request_error(
                    "El odómetro final no puede ser menor al inicial",
                ));
            }
        }

        let trip = self
            .repository
            .create(
                request.vehicle_id,
                request.description,
                request.start_odometer,
                request.end_odometer,
                request.start_date,
                request.end_date,
                request.expenses,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(trip.into())
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_by_vehicle(vehicle_id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let trip = self
            .repository
            .update(
                id,
                request.description,
                request.start_odometer,
                request.end_odometer,
                request.start_date,
                request.end_date,
                request.expenses,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    /// Atribución de costos del viaje: combustible interpolado sobre las
    /// cargas del rango de odómetro más los gastos itemizados.
    pub async fn cost(&self, id: Uuid) -> Result<TripCostResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let logs = self.fuel_logs.find_by_vehicle(trip.vehicle_id).await?;

        let fuel_cost = stats_service::trip_fuel_cost(&trip, &logs);
        let expenses_total = stats_service::trip_expenses_total(&trip);

        Ok(TripCostResponse {
            trip_id: trip.id,
            distance: trip.distance(),
            fuel_cost,
            expenses_total,
            total_cost: fuel_cost + expenses_total,
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
