//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod fuel_log;
pub mod push_subscription;
pub mod reminder;
pub mod trip;
pub mod vehicle;
