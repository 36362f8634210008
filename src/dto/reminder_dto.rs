//! DTOs de ServiceReminder
//!
//! Las responses de recordatorio llevan la urgencia derivada por el
//! clasificador central; nunca se persiste.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reminder::ServiceReminder;
use crate::services::urgency_service::UrgencyAssessment;

/// Request para crear un recordatorio de service
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReminderRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(range(min = 0.0))]
    pub due_odometer: Option<f64>,

    pub due_date: Option<NaiveDate>,
}

/// Request para actualizar un recordatorio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReminderRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(range(min = 0.0))]
    pub due_odometer: Option<f64>,

    pub due_date: Option<NaiveDate>,
}

/// Request para marcar un recordatorio como completado
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteReminderRequest {
    pub completed_date: NaiveDate,

    #[validate(range(min = 0.0))]
    pub completed_odometer: Option<f64>,

    pub completed_cost: Option<Decimal>,

    #[validate(length(max = 200))]
    pub completed_location: Option<String>,
}

/// Response de recordatorio con su urgencia derivada
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub due_odometer: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub completed_odometer: Option<f64>,
    pub completed_cost: Option<Decimal>,
    pub completed_location: Option<String>,
    pub last_notification_sent: Option<DateTime<Utc>>,
    // Urgencia derivada (None si no se pudo resolver el odómetro actual)
    pub kms_remaining: Option<f64>,
    pub days_remaining: Option<i64>,
    pub is_overdue: bool,
    pub is_urgent: bool,
}

impl ReminderResponse {
    /// Construir la response combinando el recordatorio con su urgencia
    pub fn from_reminder(reminder: ServiceReminder, assessment: Option<UrgencyAssessment>) -> Self {
        let assessment = assessment.unwrap_or_default();
        Self {
            id: reminder.id,
            vehicle_id: reminder.vehicle_id,
            title: reminder.title,
            notes: reminder.notes,
            due_odometer: reminder.due_odometer,
            due_date: reminder.due_date,
            completed_date: reminder.completed_date,
            completed_odometer: reminder.completed_odometer,
            completed_cost: reminder.completed_cost,
            completed_location: reminder.completed_location,
            last_notification_sent: reminder.last_notification_sent,
            kms_remaining: assessment.kms_remaining,
            days_remaining: assessment.days_remaining,
            is_overdue: assessment.is_overdue,
            is_urgent: assessment.is_urgent,
        }
    }
}
