//! Modelo de ServiceReminder
//!
//! Una obligación de mantenimiento con vencimiento opcional por odómetro
//! y/o por fecha. La urgencia y el estado vencido se derivan, nunca se
//! almacenan; lo único persistido del lado de notificaciones es el
//! timestamp de la última notificación enviada (cooldown).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ServiceReminder - mapea a la tabla service_reminders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceReminder {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    /// Odómetro de vencimiento en km
    pub due_odometer: Option<f64>,
    pub due_date: Option<NaiveDate>,
    // Registro de completado (opcional)
    pub completed_date: Option<NaiveDate>,
    pub completed_odometer: Option<f64>,
    pub completed_cost: Option<Decimal>,
    pub completed_location: Option<String>,
    /// Cooldown: cuándo se envió la última notificación por este recordatorio
    pub last_notification_sent: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ServiceReminder {
    /// Un recordatorio está abierto mientras no tenga fecha de completado
    pub fn is_open(&self) -> bool {
        self.completed_date.is_none()
    }
}
