use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::subscription_controller::SubscriptionController;
use crate::dto::api_dto::ApiResponse;
use crate::dto::subscription_dto::{
    RegisterSubscriptionRequest, SubscriptionResponse, UnregisterSubscriptionRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_subscription_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_subscription))
        .route("/", get(list_subscriptions))
        .route("/", delete(unregister_subscription))
}

async fn register_subscription(
    State(state): State<AppState>,
    Json(request): Json<RegisterSubscriptionRequest>,
) -> Result<Json<ApiResponse<SubscriptionResponse>>, AppError> {
    let controller =
        SubscriptionController::new(state.pool.clone(), state.subscription_cache.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_subscriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubscriptionResponse>>, AppError> {
    let controller =
        SubscriptionController::new(state.pool.clone(), state.subscription_cache.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn unregister_subscription(
    State(state): State<AppState>,
    Json(request): Json<UnregisterSubscriptionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller =
        SubscriptionController::new(state.pool.clone(), state.subscription_cache.clone());
    controller.unregister(request).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Suscripción eliminada exitosamente"
    })))
}
