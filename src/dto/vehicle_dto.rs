//! DTOs de Vehicle

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(range(min = 1.0, max = 500.0))]
    pub tank_capacity: Option<f64>,

    #[validate(range(min = 0.1, max = 100.0))]
    pub average_consumption: Option<f64>,

    pub purchase_price: Option<Decimal>,
    pub annual_insurance: Option<Decimal>,
    pub annual_patente: Option<Decimal>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(range(min = 1.0, max = 500.0))]
    pub tank_capacity: Option<f64>,

    #[validate(range(min = 0.1, max = 100.0))]
    pub average_consumption: Option<f64>,

    pub purchase_price: Option<Decimal>,
    pub annual_insurance: Option<Decimal>,
    pub annual_patente: Option<Decimal>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub tank_capacity: Option<f64>,
    pub average_consumption: Option<f64>,
    pub purchase_price: Option<Decimal>,
    pub annual_insurance: Option<Decimal>,
    pub annual_patente: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            tank_capacity: vehicle.tank_capacity,
            average_consumption: vehicle.average_consumption,
            purchase_price: vehicle.purchase_price,
            annual_insurance: vehicle.annual_insurance,
            annual_patente: vehicle.annual_patente,
            created_at: vehicle.created_at,
        }
    }
}
