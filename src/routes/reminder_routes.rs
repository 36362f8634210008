use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reminder_controller::ReminderController;
use crate::dto::api_dto::ApiResponse;
use crate::dto::reminder_dto::{
    CompleteReminderRequest, CreateReminderRequest, ReminderResponse, UpdateReminderRequest,
};
use crate::services::urgency_service::UrgencyThresholds;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reminder_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reminder))
        .route("/vehicle/:vehicle_id", get(list_reminders))
        .route("/:id", get(get_reminder))
        .route("/:id", put(update_reminder))
        .route("/:id", delete(delete_reminder))
        .route("/:id/complete", post(complete_reminder))
}

fn controller(state: &AppState) -> ReminderController {
    ReminderController::new(
        state.pool.clone(),
        state.odometer_cache.clone(),
        UrgencyThresholds {
            km: state.config.urgency_km_threshold,
            days: state.config.urgency_day_threshold,
        },
    )
}

async fn create_reminder(
    State(state): State<AppState>,
    Json(request): Json<CreateReminderRequest>,
) -> Result<Json<ApiResponse<ReminderResponse>>, AppError> {
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReminderResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_reminders(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<ReminderResponse>>, AppError> {
    let response = controller(&state).list_by_vehicle(vehicle_id).await?;
    Ok(Json(response))
}

async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReminderRequest>,
) -> Result<Json<ApiResponse<ReminderResponse>>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn complete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteReminderRequest>,
) -> Result<Json<ApiResponse<ReminderResponse>>, AppError> {
    let response = controller(&state).complete(id, request).await?;
    Ok(Json(response))
}

async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Recordatorio eliminado exitosamente"
    })))
}
