//! Controllers de la API
//!
//! Orquestan validación, repositorios y servicios por recurso.

pub mod fuel_log_controller;
pub mod notification_controller;
pub mod reminder_controller;
pub mod subscription_controller;
pub mod trip_controller;
pub mod vehicle_controller;
