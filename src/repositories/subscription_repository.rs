use crate::models::push_subscription::PushSubscription;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registrar una suscripción. Si el endpoint ya existe se actualizan
    /// las claves (el navegador puede rotar la suscripción sobre el mismo
    /// endpoint).
    pub async fn upsert(
        &self,
        endpoint: String,
        p256dh: String,
        auth: String,
    ) -> Result<PushSubscription, AppError> {
        let subscription = sqlx::query_as::<_, PushSubscription>(
            r#"
            INSERT INTO push_subscriptions (id, endpoint, p256dh, auth, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (endpoint)
            DO UPDATE SET p256dh = EXCLUDED.p256dh, auth = EXCLUDED.auth
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(endpoint)
        .bind(p256dh)
        .bind(auth)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(subscription)
    }

    pub async fn find_all(&self) -> Result<Vec<PushSubscription>, AppError> {
        let subscriptions = sqlx::query_as::<_, PushSubscription>(
            "SELECT * FROM push_subscriptions ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions)
    }

    /// Eliminar una suscripción por endpoint (baja manual o fallo permanente)
    pub async fn delete_by_endpoint(&self, endpoint: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
            .bind(endpoint)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
