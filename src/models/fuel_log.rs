//! Modelo de FuelLog
//!
//! Un evento de carga de combustible. Se ordenan por odómetro; el consumo
//! entre dos cargas solo es válido si la carga anterior fue tanque lleno.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// FuelLog - mapea a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    /// Lectura del odómetro en km al momento de la carga
    pub odometer: f64,
    pub liters: f64,
    pub total_cost: Decimal,
    pub price_per_liter: Decimal,
    /// Tanque lleno: habilita el cálculo de consumo del tramo siguiente
    pub full_tank: bool,
    /// Tipo de cambio opcional si la carga se pagó en otra moneda
    pub exchange_rate: Option<Decimal>,
    pub logged_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}
