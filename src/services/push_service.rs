//! Entrega de notificaciones Web Push
//!
//! Este módulo encapsula el cliente Web Push (firma VAPID + envío por
//! endpoint) detrás del trait `PushClient`, para que el dispatcher se
//! pueda testear sin red.

use async_trait::async_trait;
use serde::Serialize;
use web_push::{
    ContentEncoding, HyperWebPushClient, SubscriptionInfo, VapidSignatureBuilder, WebPushClient,
    WebPushError, WebPushMessageBuilder, URL_SAFE_NO_PAD,
};

use crate::models::push_subscription::PushSubscription;

/// Payload de una notificación push. `tag` lleva el id del recordatorio
/// para que el navegador reemplace pushes repetidos en lugar de apilarlos.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub tag: String,
}

/// Resultado de un envío a una suscripción individual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    /// El endpoint ya no existe (404/410): la suscripción debe eliminarse
    PermanentFailure,
    /// Fallo recuperable: se loguea y se reintenta en el próximo run
    TransientFailure,
}

/// Cliente de entrega push por suscripción
#[async_trait]
pub trait PushClient: Send + Sync {
    async fn send(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
    ) -> DeliveryStatus;
}

/// Implementación real sobre el protocolo Web Push con firma VAPID
pub struct WebPushService {
    vapid_private_key: String,
    vapid_subject: String,
    client: HyperWebPushClient,
}

impl WebPushService {
    pub fn new(vapid_private_key: String, vapid_subject: String) -> Self {
        Self {
            vapid_private_key,
            vapid_subject,
            client: HyperWebPushClient::new(),
        }
    }

    fn classify_error(error: &WebPushError) -> DeliveryStatus {
        match error {
            WebPushError::EndpointNotValid | WebPushError::EndpointNotFound => {
                DeliveryStatus::PermanentFailure
            }
            _ => DeliveryStatus::TransientFailure,
        }
    }
}

#[async_trait]
impl PushClient for WebPushService {
    async fn send(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
    ) -> DeliveryStatus {
        let subscription_info = SubscriptionInfo::new(
            subscription.endpoint.clone(),
            subscription.p256dh.clone(),
            subscription.auth.clone(),
        );

        let mut signature_builder = match VapidSignatureBuilder::from_base64(
            &self.vapid_private_key,
            URL_SAFE_NO_PAD,
            &subscription_info,
        ) {
            Ok(builder) => builder,
            Err(e) => {
                log::error!("❌ Clave VAPID inválida: {}", e);
                return DeliveryStatus::TransientFailure;
            }
        };
        signature_builder.add_claim("sub", self.vapid_subject.clone());

        let signature = match signature_builder.build() {
            Ok(signature) => signature,
            Err(e) => {
                log::error!("❌ Error firmando el mensaje push: {}", e);
                return DeliveryStatus::TransientFailure;
            }
        };

        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(e) => {
                log::error!("❌ Error serializando payload push: {}", e);
                return DeliveryStatus::TransientFailure;
            }
        };

        let mut builder = WebPushMessageBuilder::new(&subscription_info);
        builder.set_vapid_signature(signature);
        builder.set_payload(ContentEncoding::Aes128Gcm, &body);

        let message = match builder.build() {
            Ok(message) => message,
            Err(e) => {
                log::error!("❌ Error construyendo mensaje push: {}", e);
                return DeliveryStatus::TransientFailure;
            }
        };

        match self.client.send(message).await {
            Ok(_) => DeliveryStatus::Delivered,
            Err(e) => {
                let status = Self::classify_error(&e);
                match status {
                    DeliveryStatus::PermanentFailure => {
                        log::warn!(
                            "🗑️ Endpoint dado de baja, se eliminará la suscripción: {}",
                            subscription.endpoint
                        );
                    }
                    _ => {
                        log::warn!(
                            "⚠️ Fallo transitorio enviando a {}: {}",
                            subscription.endpoint,
                            e
                        );
                    }
                }
                status
            }
        }
    }
}
