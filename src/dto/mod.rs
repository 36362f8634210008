//! DTOs de la API
//!
//! Requests y responses que expone la capa HTTP.

pub mod api_dto;
pub mod fuel_log_dto;
pub mod reminder_dto;
pub mod stats_dto;
pub mod subscription_dto;
pub mod trip_dto;
pub mod vehicle_dto;
