use std::sync::Arc;

use crate::services::notification_service::{NotificationConfig, NotificationService, RunSummary};
use crate::services::push_service::WebPushService;
use crate::services::urgency_service::UrgencyThresholds;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct NotificationController {
    service: NotificationService,
}

impl NotificationController {
    /// Construir el controller validando la configuración VAPID.
    ///
    /// La ausencia de cualquiera de las claves es un error fatal del run
    /// completo (500), antes de procesar ningún recordatorio.
    pub fn new(state: &AppState) -> Result<Self, AppError> {
        let private_key = state.config.vapid_private_key.clone().ok_or_else(|| {
            AppError::Configuration("VAPID_PRIVATE_KEY no está configurada".to_string())
        })?;
        state.config.vapid_public_key.clone().ok_or_else(|| {
            AppError::Configuration("VAPID_PUBLIC_KEY no está configurada".to_string())
        })?;

        let push = Arc::new(WebPushService::new(
            private_key,
            state.config.vapid_subject.clone(),
        ));

        let config = NotificationConfig {
            thresholds: UrgencyThresholds {
                km: state.config.urgency_km_threshold,
                days: state.config.urgency_day_threshold,
            },
            cooldown_hours: state.config.notification_cooldown_hours,
        };

        let service = NotificationService::new(
            state.pool.clone(),
            push,
            config,
            state.odometer_cache.clone(),
            state.subscription_cache.clone(),
        );

        Ok(Self { service })
    }

    /// Ejecutar un run del job de notificaciones
    pub async fn run(&self, ignore_cooldown: bool) -> Result<RunSummary, AppError> {
        self.service.run(ignore_cooldown).await
    }

    /// Envío manual de prueba (ignora clasificación y cooldown)
    pub async fn send_test(&self) -> Result<RunSummary, AppError> {
        self.service.send_test_notification().await
    }
}
