//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente
//! a la tabla vehicles del schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea a la tabla vehicles
///
/// Los campos financieros (precio de compra, seguro y patente anuales) son
/// opcionales y solo se usan para el costo por km amortizado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    /// Capacidad del tanque en litros
    pub tank_capacity: Option<f64>,
    /// Consumo promedio de referencia en km/l
    pub average_consumption: Option<f64>,
    pub purchase_price: Option<Decimal>,
    pub annual_insurance: Option<Decimal>,
    pub annual_patente: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}
