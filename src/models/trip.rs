//! Modelo de Trip
//!
//! Un viaje con odómetro de inicio/fin y gastos itemizados opcionales.
//! La atribución de costo de combustible interpola sobre los fuel logs
//! que caen dentro del rango de odómetro del viaje.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Gasto itemizado de un viaje (peajes, alojamiento, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripExpense {
    pub description: String,
    pub amount: Decimal,
}

/// Trip - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub description: String,
    pub start_odometer: f64,
    /// Odómetro final; None mientras el viaje está en curso
    pub end_odometer: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub expenses: Json<Vec<TripExpense>>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Un viaje está completado cuando tiene odómetro final
    pub fn is_completed(&self) -> bool {
        self.end_odometer.is_some()
    }

    /// Distancia recorrida en km, None si el viaje sigue en curso
    pub fn distance(&self) -> Option<f64> {
        self.end_odometer.map(|end| end - self.start_odometer)
    }
}
