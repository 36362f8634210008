use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

use crate::cache::TtlCache;
use crate::dto::api_dto::ApiResponse;
use crate::dto::subscription_dto::{
    RegisterSubscriptionRequest, SubscriptionResponse, UnregisterSubscriptionRequest,
};
use crate::models::push_subscription::PushSubscription;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::utils::errors::AppError;

pub struct SubscriptionController {
    repository: SubscriptionRepository,
    subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
}

impl SubscriptionController {
    pub fn new(
        pool: PgPool,
        subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
    ) -> Self {
        Self {
            repository: SubscriptionRepository::new(pool),
            subscription_cache,
        }
    }

    pub async fn register(
        &self,
        request: RegisterSubscriptionRequest,
    ) -> Result<ApiResponse<SubscriptionResponse>, AppError> {
        request.validate()?;

        let subscription = self
            .repository
            .upsert(request.endpoint, request.keys.p256dh, request.keys.auth)
            .await?;

        // El cache de suscripciones quedó desactualizado
        self.subscription_cache.clear().await;

        Ok(ApiResponse::success_with_message(
            subscription.into(),
            "Suscripción registrada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<SubscriptionResponse>, AppError> {
        let subscriptions = self.repository.find_all().await?;
        Ok(subscriptions
            .into_iter()
            .map(SubscriptionResponse::from)
            .collect())
    }

    pub async fn unregister(
        &self,
        request: UnregisterSubscriptionRequest,
    ) -> Result<(), AppError> {
        request.validate()?;

        let deleted = self.repository.delete_by_endpoint(&request.endpoint).await?;
        if !deleted {
            return Err(AppError::NotFound("Suscripción no encontrada".to_string()));
        }

        self.subscription_cache.clear().await;
        Ok(())
    }
}
