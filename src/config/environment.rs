//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, umbrales de
//! urgencia para recordatorios y claves VAPID para Web Push.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    // Claves VAPID para Web Push. Opcionales al arrancar: su ausencia recién
    // es fatal cuando se ejecuta el job de notificaciones (500 en ese run).
    pub vapid_public_key: Option<String>,
    pub vapid_private_key: Option<String>,
    pub vapid_subject: String,
    // Umbrales de urgencia y cooldown de notificaciones
    pub urgency_km_threshold: f64,
    pub urgency_day_threshold: i64,
    pub notification_cooldown_hours: i64,
    // TTL de los caches locales del proceso (odómetro y suscripciones)
    pub cache_ttl_seconds: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            vapid_public_key: env::var("VAPID_PUBLIC_KEY").ok(),
            vapid_private_key: env::var("VAPID_PRIVATE_KEY").ok(),
            vapid_subject: env::var("VAPID_SUBJECT")
                .unwrap_or_else(|_| "mailto:admin@fueltracker.app".to_string()),
            urgency_km_threshold: env::var("URGENCY_KM_THRESHOLD")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("URGENCY_KM_THRESHOLD must be a valid number"),
            urgency_day_threshold: env::var("URGENCY_DAY_THRESHOLD")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("URGENCY_DAY_THRESHOLD must be a valid number"),
            notification_cooldown_hours: env::var("NOTIFICATION_COOLDOWN_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("NOTIFICATION_COOLDOWN_HOURS must be a valid number"),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .expect("CACHE_TTL_SECONDS must be a valid number"),
        }
    }
}
