//! Rutas del job de notificaciones
//!
//! El endpoint de run está pensado para ser invocado por un scheduler
//! externo (cron). Devuelve 200 con un resumen en texto plano, o 500 si
//! falta configuración VAPID o hay un error no manejado; el trabajo
//! parcial ya cometido no se revierte.

use axum::{
    extract::{Query, State},
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::controllers::notification_controller::NotificationController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_notification_router() -> Router<AppState> {
    Router::new()
        .route("/run", post(run_notifications))
        .route("/test", post(send_test_notification))
}

#[derive(Debug, Deserialize)]
struct RunParams {
    /// Ignorar el cooldown (envío forzado)
    #[serde(default)]
    force: bool,
}

async fn run_notifications(
    State(state): State<AppState>,
    Query(params): Query<RunParams>,
) -> Result<String, AppError> {
    let controller = NotificationController::new(&state)?;
    let summary = controller.run(params.force).await?;
    Ok(summary.to_text())
}

async fn send_test_notification(State(state): State<AppState>) -> Result<String, AppError> {
    let controller = NotificationController::new(&state)?;
    let summary = controller.send_test().await?;
    if summary.notified > 0 {
        Ok("Notificación de prueba enviada".to_string())
    } else {
        Ok("No se pudo entregar la notificación de prueba".to_string())
    }
}
