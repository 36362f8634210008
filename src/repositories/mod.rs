//! Repositorios de acceso a datos
//!
//! Un repositorio por entidad; encapsulan todas las queries SQL.

pub mod fuel_log_repository;
pub mod reminder_repository;
pub mod subscription_repository;
pub mod trip_repository;
pub mod vehicle_repository;
