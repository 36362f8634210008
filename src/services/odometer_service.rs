//! Resolución del odómetro actual de un vehículo
//!
//! El odómetro actual es el máximo entre la última carga de combustible
//! y el último viaje completado. Las lecturas pasan por un cache local
//! con TTL para no repetir queries dentro de un mismo run del job.

use std::sync::Arc;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppError;

pub struct OdometerService {
    fuel_logs: FuelLogRepository,
    trips: TripRepository,
    cache: Arc<TtlCache<Uuid, f64>>,
}

impl OdometerService {
    pub fn new(
        fuel_logs: FuelLogRepository,
        trips: TripRepository,
        cache: Arc<TtlCache<Uuid, f64>>,
    ) -> Self {
        Self {
            fuel_logs,
            trips,
            cache,
        }
    }

    /// Odómetro actual del vehículo, None si no hay historial alguno.
    pub async fn current_odometer(&self, vehicle_id: Uuid) -> Result<Option<f64>, AppError> {
        if let Some(cached) = self.cache.get(&vehicle_id).await {
            return Ok(Some(cached));
        }

        let from_logs = self.fuel_logs.latest_odometer(vehicle_id).await?;
        let from_trips = self.trips.latest_completed_end_odometer(vehicle_id).await?;

        let current = match (from_logs, from_trips) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };

        if let Some(value) = current {
            self.cache.set(vehicle_id, value).await;
        }

        Ok(current)
    }
}
