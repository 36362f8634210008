//! DTOs de estadísticas de vehículo

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Response de estadísticas de consumo y costos de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleStatsResponse {
    pub vehicle_id: Uuid,
    pub fuel_log_count: usize,
    /// Distancia total cubierta por el historial de cargas, en km
    pub total_distance: Option<f64>,
    pub total_liters: f64,
    pub total_fuel_cost: Decimal,
    /// Consumo promedio ponderado en km/l (solo tramos válidos)
    pub average_consumption: Option<f64>,
    /// Precio promedio por litro ponderado por litros cargados
    pub average_price_per_liter: Option<Decimal>,
    /// Costo de combustible por km
    pub cost_per_km: Option<Decimal>,
    /// Costo por km amortizado: combustible + seguro/patente prorrateados
    pub amortized_cost_per_km: Option<Decimal>,
}
