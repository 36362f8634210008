//! DTOs de FuelLog

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fuel_log::FuelLog;

/// Request para registrar una carga de combustible
///
/// Validación blanda: no se verifica monotonía del odómetro contra cargas
/// anteriores, solo que los valores sean positivos.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 0.0))]
    pub odometer: f64,

    #[validate(range(min = 0.01))]
    pub liters: f64,

    pub total_cost: Decimal,

    /// Si no se envía, se deriva como total_cost / liters
    pub price_per_liter: Option<Decimal>,

    #[serde(default = "default_full_tank")]
    pub full_tank: bool,

    pub exchange_rate: Option<Decimal>,

    pub logged_at: NaiveDate,
}

fn default_full_tank() -> bool {
    true
}

/// Request para actualizar una carga existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuelLogRequest {
    #[validate(range(min = 0.0))]
    pub odometer: Option<f64>,

    #[validate(range(min = 0.01))]
    pub liters: Option<f64>,

    pub total_cost: Option<Decimal>,
    pub price_per_liter: Option<Decimal>,
    pub full_tank: Option<bool>,
    pub exchange_rate: Option<Decimal>,
    pub logged_at: Option<NaiveDate>,
}

/// Response de carga de combustible
#[derive(Debug, Serialize)]
pub struct FuelLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub odometer: f64,
    pub liters: f64,
    pub total_cost: Decimal,
    pub price_per_liter: Decimal,
    pub full_tank: bool,
    pub exchange_rate: Option<Decimal>,
    pub logged_at: NaiveDate,
    /// Consumo del tramo desde la carga anterior en km/l.
    /// Solo presente si la carga anterior fue tanque lleno.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,
}

impl From<FuelLog> for FuelLogResponse {
    fn from(log: FuelLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            odometer: log.odometer,
            liters: log.liters,
            total_cost: log.total_cost,
            price_per_liter: log.price_per_liter,
            full_tank: log.full_tank,
            exchange_rate: log.exchange_rate,
            logged_at: log.logged_at,
            consumption: None,
        }
    }
}
