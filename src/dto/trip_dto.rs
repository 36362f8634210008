//! DTOs de Trip

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Trip, TripExpense};

/// Request para crear un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub start_odometer: f64,

    #[validate(range(min = 0.0))]
    pub end_odometer: Option<f64>,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub expenses: Vec<TripExpense>,
}

/// Request para actualizar un viaje (cerrar, corregir odómetro, gastos)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    #[validate(length(min = 1, max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub start_odometer: Option<f64>,

    #[validate(range(min = 0.0))]
    pub end_odometer: Option<f64>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub expenses: Option<Vec<TripExpense>>,
}

/// Response de viaje
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub description: String,
    pub start_odometer: f64,
    pub end_odometer: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub expenses: Vec<TripExpense>,
    pub distance: Option<f64>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        let distance = trip.distance();
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            description: trip.description,
            start_odometer: trip.start_odometer,
            end_odometer: trip.end_odometer,
            start_date: trip.start_date,
            end_date: trip.end_date,
            expenses: trip.expenses.0,
            distance,
        }
    }
}

/// Response de atribución de costos de un viaje
#[derive(Debug, Serialize)]
pub struct TripCostResponse {
    pub trip_id: Uuid,
    pub distance: Option<f64>,
    /// Costo de combustible interpolado sobre los fuel logs del rango
    pub fuel_cost: Decimal,
    pub expenses_total: Decimal,
    pub total_cost: Decimal,
}
