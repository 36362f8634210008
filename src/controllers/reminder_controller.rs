use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::cache::TtlCache;
use crate::dto::api_dto::ApiResponse;
use crate::dto::reminder_dto::{
    CompleteReminderRequest, CreateReminderRequest, ReminderResponse, UpdateReminderRequest,
};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::reminder_repository::ReminderRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::odometer_service::OdometerService;
use crate::services::urgency_service::{self, UrgencyThresholds};
use crate::utils::errors::AppError;

pub struct ReminderController {
    repository: ReminderRepository,
    vehicles: VehicleRepository,
    odometer: OdometerService,
    thresholds: UrgencyThresholds,
}

impl ReminderController {
    pub fn new(
        pool: PgPool,
        odometer_cache: Arc<TtlCache<Uuid, f64>>,
        thresholds: UrgencyThresholds,
    ) -> Self {
        let odometer = OdometerService::new(
            FuelLogRepository::new(pool.clone()),
            TripRepository::new(pool.clone()),
            odometer_cache,
        );
        Self {
            repository: ReminderRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
            odometer,
            thresholds,
        }
    }

    /// Anotar un recordatorio con su urgencia derivada. Si el vehículo no
    /// tiene historial de odómetro la urgencia queda vacía.
    async fn annotate(&self, reminder: crate::models::reminder::ServiceReminder) -> Result<ReminderResponse, AppError> {
        let assessment = match self.odometer.current_odometer(reminder.vehicle_id).await? {
            Some(current) => Some(urgency_service::assess(
                reminder.due_odometer,
                reminder.due_date,
                current,
                Utc::now().date_naive(),
                &self.thresholds,
            )),
            None => None,
        };

        Ok(ReminderResponse::from_reminder(reminder, assessment))
    }

    pub async fn create(
        &self,
        request: CreateReminderRequest,
    ) -> Result<ApiResponse<ReminderResponse>, AppError> {
        request.validate()?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let reminder = self
            .repository
            .create(
                request.vehicle_id,
                request.title,
                request.notes,
                request.due_odometer,
                request.due_date,
            )
            .await?;

        let response = self.annotate(reminder).await?;
        Ok(ApiResponse::success_with_message(
            response,
            "Recordatorio creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ReminderResponse, AppError> {
        let reminder = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        self.annotate(reminder).await
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ReminderResponse>, AppError> {
        let reminders = self.repository.find_by_vehicle(vehicle_id).await?;

        let mut responses = Vec::with_capacity(reminders.len());
        for reminder in reminders {
            responses.push(self.annotate(reminder).await?);
        }

        Ok(responses)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateReminderRequest,
    ) -> Result<ApiResponse<ReminderResponse>, AppError> {
        request.validate()?;

        let reminder = self
            .repository
            .update(
                id,
                request.title,
                request.notes,
                request.due_odometer,
                request.due_date,
            )
            .await?;

        let response = self.annotate(reminder).await?;
        Ok(ApiResponse::success_with_message(
            response,
            "Recordatorio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn complete(
        &self,
        id: Uuid,
        request: CompleteReminderRequest,
    ) -> Result<ApiResponse<ReminderResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        if !current.is_open() {
            return Err(AppError::Conflict(
                "El recordatorio ya está completado".to_string(),
            ));
        }

        let reminder = self
            .repository
            .complete(
                id,
                request.completed_date,
                request.completed_odometer,
                request.completed_cost,
                request.completed_location,
            )
            .await?;

        let response = self.annotate(reminder).await?;
        Ok(ApiResponse::success_with_message(
            response,
            "Service registrado como completado".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
