//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::config::environment::EnvironmentConfig;
use crate::models::push_subscription::PushSubscription;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    /// Cache local de odómetro actual por vehículo
    pub odometer_cache: Arc<TtlCache<Uuid, f64>>,
    /// Cache local de la lista de suscripciones push
    pub subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_seconds);
        Self {
            pool,
            config,
            odometer_cache: Arc::new(TtlCache::new(ttl)),
            subscription_cache: Arc::new(TtlCache::new(ttl)),
        }
    }
}
