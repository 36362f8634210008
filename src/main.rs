mod cache;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("⛽ Fuel Tracker - Backend de seguimiento de vehículos");
    info!("====================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    info!("🌍 Entorno: {}", config.environment);

    if config.vapid_private_key.is_none() || config.vapid_public_key.is_none() {
        info!("⚠️ Claves VAPID sin configurar: el job de notificaciones responderá 500");
    }

    let host = config.host.clone();
    let port = config.port;
    let app_state = AppState::new(pool, config);

    // Crear router de la API
    let app = Router::new()
        .route("/test", get(test_endpoint))
        .route("/health", get(health_endpoint))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/fuel-log", routes::fuel_log_routes::create_fuel_log_router())
        .nest("/api/reminder", routes::reminder_routes::create_reminder_router())
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest(
            "/api/subscription",
            routes::subscription_routes::create_subscription_router(),
        )
        .nest(
            "/api/notifications",
            routes::notification_routes::create_notification_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("   GET  /api/vehicle/:id/stats - Estadísticas de consumo y costos");
    info!("⛽ Endpoints - FuelLog:");
    info!("   POST /api/fuel-log - Registrar carga");
    info!("   GET  /api/fuel-log/vehicle/:vehicle_id - Historial por vehículo");
    info!("   GET  /api/fuel-log/:id - Obtener carga");
    info!("   PUT  /api/fuel-log/:id - Actualizar carga");
    info!("   DELETE /api/fuel-log/:id - Eliminar carga");
    info!("🔧 Endpoints - Reminder:");
    info!("   POST /api/reminder - Crear recordatorio");
    info!("   GET  /api/reminder/vehicle/:vehicle_id - Recordatorios con urgencia");
    info!("   GET  /api/reminder/:id - Obtener recordatorio");
    info!("   PUT  /api/reminder/:id - Actualizar recordatorio");
    info!("   POST /api/reminder/:id/complete - Registrar service completado");
    info!("   DELETE /api/reminder/:id - Eliminar recordatorio");
    info!("🛣️ Endpoints - Trip:");
    info!("   POST /api/trip - Crear viaje");
    info!("   GET  /api/trip/vehicle/:vehicle_id - Viajes por vehículo");
    info!("   GET  /api/trip/:id - Obtener viaje");
    info!("   GET  /api/trip/:id/cost - Atribución de costos del viaje");
    info!("   PUT  /api/trip/:id - Actualizar viaje");
    info!("   DELETE /api/trip/:id - Eliminar viaje");
    info!("📱 Endpoints - PushSubscription:");
    info!("   POST /api/subscription - Registrar suscripción");
    info!("   GET  /api/subscription - Listar suscripciones");
    info!("   DELETE /api/subscription - Dar de baja suscripción");
    info!("🔔 Endpoints - Notificaciones (invocados por scheduler):");
    info!("   POST /api/notifications/run - Ejecutar job de recordatorios");
    info!("   POST /api/notifications/run?force=true - Ignorar cooldown");
    info!("   POST /api/notifications/test - Envío de prueba");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Fuel Tracker API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Health check para el scheduler
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fuel-tracker",
        "status": "healthy",
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
