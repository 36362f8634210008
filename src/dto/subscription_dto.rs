//! DTOs de PushSubscription
//!
//! El request de registro replica la forma del objeto PushSubscription
//! que emite el navegador: endpoint + keys {p256dh, auth}.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::push_subscription::PushSubscription;

/// Claves de cifrado de la suscripción
#[derive(Debug, Deserialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// Request para registrar una suscripción push
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterSubscriptionRequest {
    #[validate(url)]
    pub endpoint: String,

    pub keys: SubscriptionKeys,
}

/// Request para dar de baja una suscripción por endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct UnregisterSubscriptionRequest {
    #[validate(url)]
    pub endpoint: String,
}

/// Response de suscripción (sin exponer las claves)
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub endpoint: String,
    pub created_at: DateTime<Utc>,
}

impl From<PushSubscription> for SubscriptionResponse {
    fn from(subscription: PushSubscription) -> Self {
        Self {
            id: subscription.id,
            endpoint: subscription.endpoint,
            created_at: subscription.created_at,
        }
    }
}
