//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan operaciones que involucran múltiples modelos
//! o integraciones externas (Web Push).

pub mod notification_service;
pub mod odometer_service;
pub mod push_service;
pub mod stats_service;
pub mod urgency_service;
