//! Modelo de PushSubscription
//!
//! Una suscripción Web Push registrada por el navegador (endpoint + claves).
//! Se elimina cuando el push service responde con fallo permanente
//! (endpoint dado de baja, equivalente HTTP 404/410).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// PushSubscription - mapea a la tabla push_subscriptions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushSubscription {
    pub id: Uuid,
    /// URL del endpoint emitido por el navegador (único)
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    pub created_at: DateTime<Utc>,
}
