use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fuel_log_controller::FuelLogController;
use crate::dto::api_dto::ApiResponse;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, FuelLogResponse, UpdateFuelLogRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_log_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel_log))
        .route("/vehicle/:vehicle_id", get(list_fuel_logs))
        .route("/:id", get(get_fuel_log))
        .route("/:id", put(update_fuel_log))
        .route("/:id", delete(delete_fuel_log))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FuelLogResponse>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.list_by_vehicle(vehicle_id).await?;
    Ok(Json(response))
}

async fn update_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Carga de combustible eliminada exitosamente"
    })))
}
