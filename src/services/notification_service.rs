//! Job de notificaciones de recordatorios
//!
//! Recorre todos los recordatorios abiertos, resuelve el odómetro actual
//! de cada vehículo, clasifica urgencia y despacha Web Push a todas las
//! suscripciones registradas respetando el cooldown por recordatorio.
//!
//! El job corre hasta completarse por invocación externa (scheduler);
//! es secuencial entre recordatorios y concurrente solo en el fan-out a
//! suscripciones. El cooldown es best-effort: dos runs superpuestos
//! pueden pasar ambos el chequeo y enviar doble.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::models::push_subscription::PushSubscription;
use crate::models::reminder::ServiceReminder;
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::reminder_repository::ReminderRepository;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::services::odometer_service::OdometerService;
use crate::services::push_service::{DeliveryStatus, NotificationPayload, PushClient};
use crate::services::urgency_service::{self, UrgencyAssessment, UrgencyThresholds};
use crate::utils::errors::AppError;

const NOTIFICATION_ICON: &str = "/icons/icon-192x192.png";
const SUBSCRIPTION_CACHE_KEY: &str = "all";

/// Fuente de recordatorios abiertos y del timestamp de cooldown
#[async_trait]
pub trait ReminderStore: Send + Sync {
    async fn find_open(&self) -> Result<Vec<ServiceReminder>, AppError>;
    async fn update_last_notification_sent(
        &self,
        id: Uuid,
        sent_at: DateTime<Utc>,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl ReminderStore for ReminderRepository {
    async fn find_open(&self) -> Result<Vec<ServiceReminder>, AppError> {
        ReminderRepository::find_open(self).await
    }

    async fn update_last_notification_sent(
        &self,
        id: Uuid,
        sent_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        ReminderRepository::update_last_notification_sent(self, id, sent_at).await
    }
}

/// Fuente de suscripciones push registradas
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PushSubscription>, AppError>;
    async fn delete_by_endpoint(&self, endpoint: &str) -> Result<bool, AppError>;
}

#[async_trait]
impl SubscriptionStore for SubscriptionRepository {
    async fn find_all(&self) -> Result<Vec<PushSubscription>, AppError> {
        SubscriptionRepository::find_all(self).await
    }

    async fn delete_by_endpoint(&self, endpoint: &str) -> Result<bool, AppError> {
        SubscriptionRepository::delete_by_endpoint(self, endpoint).await
    }
}

/// Fuente del odómetro actual por vehículo
#[async_trait]
pub trait OdometerSource: Send + Sync {
    async fn current_odometer(&self, vehicle_id: Uuid) -> Result<Option<f64>, AppError>;
}

#[async_trait]
impl OdometerSource for OdometerService {
    async fn current_odometer(&self, vehicle_id: Uuid) -> Result<Option<f64>, AppError> {
        OdometerService::current_odometer(self, vehicle_id).await
    }
}

/// Configuración del job: umbrales de urgencia y cooldown entre envíos
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub thresholds: UrgencyThresholds,
    pub cooldown_hours: i64,
}

/// Resumen de un run del job, se devuelve como texto plano al scheduler
#[derive(Debug, Default)]
pub struct RunSummary {
    pub evaluated: usize,
    pub notified: usize,
    pub skipped_not_due: usize,
    pub skipped_cooldown: usize,
    pub skipped_no_odometer: usize,
    pub subscriptions_pruned: usize,
}

impl RunSummary {
    pub fn to_text(&self) -> String {
        format!(
            "{} recordatorios evaluados, {} notificados, {} sin urgencia, {} en cooldown, {} sin odómetro, {} suscripciones eliminadas",
            self.evaluated,
            self.notified,
            self.skipped_not_due,
            self.skipped_cooldown,
            self.skipped_no_odometer,
            self.subscriptions_pruned
        )
    }
}

/// ¿Pasó el cooldown desde la última notificación de este recordatorio?
pub fn cooldown_elapsed(
    last_sent: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown_hours: i64,
) -> bool {
    match last_sent {
        None => true,
        Some(sent_at) => now.signed_duration_since(sent_at) >= Duration::hours(cooldown_hours),
    }
}

/// Construir el payload de la notificación. El texto difiere entre vencido
/// y urgente; el tag es el id del recordatorio para deduplicar en el cliente.
pub fn build_payload(
    reminder: &ServiceReminder,
    assessment: &UrgencyAssessment,
) -> NotificationPayload {
    let (title, body) = if assessment.is_overdue {
        let detail = match (assessment.kms_remaining, assessment.days_remaining) {
            (Some(kms), _) if kms < 0.0 => format!("vencido por {:.0} km", -kms),
            (_, Some(days)) if days < 0 => format!("vencido hace {} días", -days),
            _ => "vencido".to_string(),
        };
        (
            format!("⚠️ Service vencido: {}", reminder.title),
            format!("El service \"{}\" está {}", reminder.title, detail),
        )
    } else {
        let detail = match (assessment.kms_remaining, assessment.days_remaining) {
            (Some(kms), _) if kms >= 0.0 => format!("quedan {:.0} km", kms),
            (_, Some(days)) => format!("quedan {} días", days),
            _ => "está próximo".to_string(),
        };
        (
            format!("🔧 Service próximo: {}", reminder.title),
            format!("Para \"{}\" {}", reminder.title, detail),
        )
    };

    NotificationPayload {
        title,
        body,
        icon: NOTIFICATION_ICON.to_string(),
        tag: reminder.id.to_string(),
    }
}

/// Resultado del fan-out de un recordatorio a todas las suscripciones
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Al menos una entrega exitosa
    pub delivered: bool,
    /// Endpoints con fallo permanente, a eliminar
    pub pruned_endpoints: Vec<String>,
}

/// Enviar un payload a todas las suscripciones en paralelo.
///
/// Semántica all-settled: el fallo de una suscripción nunca cancela las
/// demás. El fallo transitorio solo se loguea dentro del cliente.
pub async fn dispatch_to_subscriptions(
    push: &dyn PushClient,
    subscriptions: &[PushSubscription],
    payload: &NotificationPayload,
) -> DispatchOutcome {
    let sends = subscriptions
        .iter()
        .map(|subscription| push.send(subscription, payload));
    let results = join_all(sends).await;

    let mut outcome = DispatchOutcome::default();
    for (subscription, status) in subscriptions.iter().zip(results) {
        match status {
            DeliveryStatus::Delivered => outcome.delivered = true,
            DeliveryStatus::PermanentFailure => {
                outcome.pruned_endpoints.push(subscription.endpoint.clone())
            }
            DeliveryStatus::TransientFailure => {}
        }
    }
    outcome
}

/// Servicio del job de notificaciones
pub struct NotificationService {
    reminders: Arc<dyn ReminderStore>,
    subscriptions: Arc<dyn SubscriptionStore>,
    odometer: Arc<dyn OdometerSource>,
    push: Arc<dyn PushClient>,
    config: NotificationConfig,
    subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
}

impl NotificationService {
    pub fn new(
        pool: PgPool,
        push: Arc<dyn PushClient>,
        config: NotificationConfig,
        odometer_cache: Arc<TtlCache<Uuid, f64>>,
        subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
    ) -> Self {
        let odometer = OdometerService::new(
            FuelLogRepository::new(pool.clone()),
            TripRepository::new(pool.clone()),
            odometer_cache,
        );
        Self::with_stores(
            Arc::new(ReminderRepository::new(pool.clone())),
            Arc::new(SubscriptionRepository::new(pool)),
            Arc::new(odometer),
            push,
            config,
            subscription_cache,
        )
    }

    /// Construir el servicio sobre fuentes arbitrarias de datos
    pub fn with_stores(
        reminders: Arc<dyn ReminderStore>,
        subscriptions: Arc<dyn SubscriptionStore>,
        odometer: Arc<dyn OdometerSource>,
        push: Arc<dyn PushClient>,
        config: NotificationConfig,
        subscription_cache: Arc<TtlCache<String, Vec<PushSubscription>>>,
    ) -> Self {
        Self {
            reminders,
            subscriptions,
            odometer,
            push,
            config,
            subscription_cache,
        }
    }

    /// Suscripciones registradas, con cache local para el run
    async fn registered_subscriptions(&self) -> Result<Vec<PushSubscription>, AppError> {
        if let Some(cached) = self
            .subscription_cache
            .get(&SUBSCRIPTION_CACHE_KEY.to_string())
            .await
        {
            return Ok(cached);
        }

        let subscriptions = self.subscriptions.find_all().await?;
        self.subscription_cache
            .set(SUBSCRIPTION_CACHE_KEY.to_string(), subscriptions.clone())
            .await;
        Ok(subscriptions)
    }

    /// Eliminar suscripciones con fallo permanente y mantener coherente
    /// la lista local del run y el cache.
    async fn prune_subscriptions(
        &self,
        active: &mut Vec<PushSubscription>,
        pruned_endpoints: &[String],
        summary: &mut RunSummary,
    ) -> Result<(), AppError> {
        for endpoint in pruned_endpoints {
            if self.subscriptions.delete_by_endpoint(endpoint).await? {
                summary.subscriptions_pruned += 1;
            }
        }
        if !pruned_endpoints.is_empty() {
            active.retain(|subscription| !pruned_endpoints.contains(&subscription.endpoint));
            self.subscription_cache.clear().await;
        }
        Ok(())
    }

    /// Ejecutar un run completo del job.
    ///
    /// `ignore_cooldown` fuerza el envío aunque no haya pasado el cooldown
    /// (se usa para el envío manual de prueba).
    pub async fn run(&self, ignore_cooldown: bool) -> Result<RunSummary, AppError> {
        let now = Utc::now();
        let today = now.date_naive();
        let mut summary = RunSummary::default();

        let mut active = self.registered_subscriptions().await?;
        if active.is_empty() {
            info!("📭 No hay suscripciones registradas, nada que notificar");
            return Ok(summary);
        }

        let open_reminders = self.reminders.find_open().await?;
        info!(
            "🔔 Evaluando {} recordatorios abiertos contra {} suscripciones",
            open_reminders.len(),
            active.len()
        );

        for reminder in open_reminders {
            summary.evaluated += 1;

            // Sin historial de odómetro no se puede clasificar: se saltea
            let Some(current_odometer) =
                self.odometer.current_odometer(reminder.vehicle_id).await?
            else {
                summary.skipped_no_odometer += 1;
                continue;
            };

            let assessment = urgency_service::assess(
                reminder.due_odometer,
                reminder.due_date,
                current_odometer,
                today,
                &self.config.thresholds,
            );

            if !assessment.is_overdue && !assessment.is_urgent {
                summary.skipped_not_due += 1;
                continue;
            }

            if !ignore_cooldown
                && !cooldown_elapsed(
                    reminder.last_notification_sent,
                    now,
                    self.config.cooldown_hours,
                )
            {
                summary.skipped_cooldown += 1;
                continue;
            }

            let payload = build_payload(&reminder, &assessment);
            let outcome = dispatch_to_subscriptions(self.push.as_ref(), &active, &payload).await;

            self.prune_subscriptions(&mut active, &outcome.pruned_endpoints, &mut summary)
                .await?;

            if outcome.delivered {
                // Cooldown solo se reinicia con al menos una entrega exitosa;
                // si todas fallaron, el próximo run reintenta.
                self.reminders
                    .update_last_notification_sent(reminder.id, now)
                    .await?;
                summary.notified += 1;
                info!("📨 Notificado recordatorio '{}'", reminder.title);
            } else {
                warn!(
                    "⚠️ Ninguna entrega exitosa para el recordatorio '{}'",
                    reminder.title
                );
            }

            if active.is_empty() {
                warn!("📭 Todas las suscripciones fueron eliminadas durante el run");
                break;
            }
        }

        info!("✅ Run de notificaciones: {}", summary.to_text());
        Ok(summary)
    }

    /// Envío manual de prueba a todas las suscripciones, sin clasificar
    /// recordatorios ni respetar cooldown.
    pub async fn send_test_notification(&self) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();
        let mut active = self.registered_subscriptions().await?;
        if active.is_empty() {
            return Ok(summary);
        }

        let payload = NotificationPayload {
            title: "🔔 Notificación de prueba".to_string(),
            body: "Las notificaciones de recordatorios están funcionando".to_string(),
            icon: NOTIFICATION_ICON.to_string(),
            tag: "test".to_string(),
        };

        let outcome = dispatch_to_subscriptions(self.push.as_ref(), &active, &payload).await;
        self.prune_subscriptions(&mut active, &outcome.pruned_endpoints, &mut summary)
            .await?;
        if outcome.delivered {
            summary.notified = 1;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockPushClient {
        /// Status a devolver por endpoint; Delivered si no figura
        statuses: HashMap<String, DeliveryStatus>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPushClient {
        fn new(statuses: HashMap<String, DeliveryStatus>) -> Self {
            Self {
                statuses,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PushClient for MockPushClient {
        async fn send(
            &self,
            subscription: &PushSubscription,
            _payload: &NotificationPayload,
        ) -> DeliveryStatus {
            self.calls
                .lock()
                .unwrap()
                .push(subscription.endpoint.clone());
            self.statuses
                .get(&subscription.endpoint)
                .copied()
                .unwrap_or(DeliveryStatus::Delivered)
        }
    }

    fn subscription(endpoint: &str) -> PushSubscription {
        PushSubscription {
            id: Uuid::new_v4(),
            endpoint: endpoint.to_string(),
            p256dh: "p256dh-key".to_string(),
            auth: "auth-key".to_string(),
            created_at: Utc::now(),
        }
    }

    fn reminder(title: &str) -> ServiceReminder {
        ServiceReminder {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            title: title.to_string(),
            notes: None,
            due_odometer: None,
            due_date: None,
            completed_date: None,
            completed_odometer: None,
            completed_cost: None,
            completed_location: None,
            last_notification_sent: None,
            created_at: Utc::now(),
        }
    }

    fn payload() -> NotificationPayload {
        NotificationPayload {
            title: "t".to_string(),
            body: "b".to_string(),
            icon: NOTIFICATION_ICON.to_string(),
            tag: "tag".to_string(),
        }
    }

    struct InMemoryReminders {
        reminders: Mutex<Vec<ServiceReminder>>,
    }

    impl InMemoryReminders {
        fn new(reminders: Vec<ServiceReminder>) -> Self {
            Self {
                reminders: Mutex::new(reminders),
            }
        }

        fn last_notification_sent(&self, id: Uuid) -> Option<DateTime<Utc>> {
            self.reminders
                .lock()
                .unwrap()
                .iter()
                .find(|reminder| reminder.id == id)
                .and_then(|reminder| reminder.last_notification_sent)
        }
    }

    #[async_trait]
    impl ReminderStore for InMemoryReminders {
        async fn find_open(&self) -> Result<Vec<ServiceReminder>, AppError> {
            Ok(self
                .reminders
                .lock()
                .unwrap()
                .iter()
                .filter(|reminder| reminder.is_open())
                .cloned()
                .collect())
        }

        async fn update_last_notification_sent(
            &self,
            id: Uuid,
            sent_at: DateTime<Utc>,
        ) -> Result<(), AppError> {
            for reminder in self.reminders.lock().unwrap().iter_mut() {
                if reminder.id == id {
                    reminder.last_notification_sent = Some(sent_at);
                }
            }
            Ok(())
        }
    }

    struct InMemorySubscriptions {
        subscriptions: Mutex<Vec<PushSubscription>>,
    }

    impl InMemorySubscriptions {
        fn new(subscriptions: Vec<PushSubscription>) -> Self {
            Self {
                subscriptions: Mutex::new(subscriptions),
            }
        }

        fn endpoints(&self) -> Vec<String> {
            self.subscriptions
                .lock()
                .unwrap()
                .iter()
                .map(|subscription| subscription.endpoint.clone())
                .collect()
        }
    }

    #[async_trait]
    impl SubscriptionStore for InMemorySubscriptions {
        async fn find_all(&self) -> Result<Vec<PushSubscription>, AppError> {
            Ok(self.subscriptions.lock().unwrap().clone())
        }

        async fn delete_by_endpoint(&self, endpoint: &str) -> Result<bool, AppError> {
            let mut subscriptions = self.subscriptions.lock().unwrap();
            let before = subscriptions.len();
            subscriptions.retain(|subscription| subscription.endpoint != endpoint);
            Ok(subscriptions.len() < before)
        }
    }

    /// Odómetro fijo para cualquier vehículo
    struct FixedOdometer(Option<f64>);

    #[async_trait]
    impl OdometerSource for FixedOdometer {
        async fn current_odometer(&self, _vehicle_id: Uuid) -> Result<Option<f64>, AppError> {
            Ok(self.0)
        }
    }

    fn service_with(
        reminders: Arc<InMemoryReminders>,
        subscriptions: Arc<InMemorySubscriptions>,
        odometer: Option<f64>,
        push: Arc<MockPushClient>,
    ) -> NotificationService {
        NotificationService::with_stores(
            reminders,
            subscriptions,
            Arc::new(FixedOdometer(odometer)),
            push,
            NotificationConfig {
                thresholds: UrgencyThresholds::default(),
                cooldown_hours: 24,
            },
            Arc::new(TtlCache::new(std::time::Duration::from_secs(60))),
        )
    }

    fn overdue_reminder() -> ServiceReminder {
        let mut overdue = reminder("Cambio de aceite");
        // Vencido por odómetro contra el odómetro fijo de los tests
        overdue.due_odometer = Some(50000.0);
        overdue
    }

    #[test]
    fn test_cooldown_nunca_notificado() {
        assert!(cooldown_elapsed(None, Utc::now(), 1));
    }

    #[test]
    fn test_cooldown_dentro_de_la_ventana() {
        let now = Utc::now();
        let last = now - Duration::minutes(30);
        assert!(!cooldown_elapsed(Some(last), now, 1));
    }

    #[test]
    fn test_cooldown_ventana_cumplida() {
        let now = Utc::now();
        let last = now - Duration::hours(2);
        assert!(cooldown_elapsed(Some(last), now, 1));
    }

    #[test]
    fn test_payload_vencido_vs_urgente() {
        let reminder = reminder("Cambio de aceite");

        let overdue = UrgencyAssessment {
            kms_remaining: Some(-300.0),
            days_remaining: None,
            is_overdue: true,
            is_urgent: false,
        };
        let urgent = UrgencyAssessment {
            kms_remaining: Some(500.0),
            days_remaining: None,
            is_overdue: false,
            is_urgent: true,
        };

        let overdue_payload = build_payload(&reminder, &overdue);
        let urgent_payload = build_payload(&reminder, &urgent);

        assert!(overdue_payload.title.contains("vencido"));
        assert!(overdue_payload.body.contains("300 km"));
        assert!(urgent_payload.title.contains("próximo"));
        assert!(urgent_payload.body.contains("500 km"));
        assert_ne!(overdue_payload.title, urgent_payload.title);
        // El tag lleva el id del recordatorio para deduplicar
        assert_eq!(overdue_payload.tag, reminder.id.to_string());
        assert_eq!(urgent_payload.tag, reminder.id.to_string());
    }

    #[tokio::test]
    async fn test_fan_out_a_todas_las_suscripciones() {
        let mock = MockPushClient::new(HashMap::new());
        let subscriptions = vec![
            subscription("https://push.example/a"),
            subscription("https://push.example/b"),
            subscription("https://push.example/c"),
        ];

        let outcome = dispatch_to_subscriptions(&mock, &subscriptions, &payload()).await;

        assert!(outcome.delivered);
        assert!(outcome.pruned_endpoints.is_empty());
        assert_eq!(mock.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_fallo_permanente_marca_para_eliminar() {
        let mut statuses = HashMap::new();
        statuses.insert(
            "https://push.example/muerto".to_string(),
            DeliveryStatus::PermanentFailure,
        );
        statuses.insert(
            "https://push.example/flaky".to_string(),
            DeliveryStatus::TransientFailure,
        );
        let mock = MockPushClient::new(statuses);
        let subscriptions = vec![
            subscription("https://push.example/muerto"),
            subscription("https://push.example/flaky"),
            subscription("https://push.example/ok"),
        ];

        let outcome = dispatch_to_subscriptions(&mock, &subscriptions, &payload()).await;

        // El fallo de una suscripción no cancela a las demás
        assert_eq!(mock.calls().len(), 3);
        assert!(outcome.delivered);
        // Solo el fallo permanente se elimina; el transitorio queda
        assert_eq!(
            outcome.pruned_endpoints,
            vec!["https://push.example/muerto".to_string()]
        );
    }

    #[tokio::test]
    async fn test_sin_entregas_exitosas() {
        let mut statuses = HashMap::new();
        statuses.insert(
            "https://push.example/a".to_string(),
            DeliveryStatus::TransientFailure,
        );
        statuses.insert(
            "https://push.example/b".to_string(),
            DeliveryStatus::TransientFailure,
        );
        let mock = MockPushClient::new(statuses);
        let subscriptions = vec![
            subscription("https://push.example/a"),
            subscription("https://push.example/b"),
        ];

        let outcome = dispatch_to_subscriptions(&mock, &subscriptions, &payload()).await;

        // Sin entrega exitosa el cooldown no se reinicia (lo decide run())
        assert!(!outcome.delivered);
        assert!(outcome.pruned_endpoints.is_empty());
    }

    #[tokio::test]
    async fn test_run_respeta_cooldown_entre_corridas() {
        let reminders = Arc::new(InMemoryReminders::new(vec![overdue_reminder()]));
        let subscriptions = Arc::new(InMemorySubscriptions::new(vec![subscription(
            "https://push.example/a",
        )]));
        let push = Arc::new(MockPushClient::new(HashMap::new()));
        let service = service_with(
            reminders.clone(),
            subscriptions,
            Some(60000.0),
            push.clone(),
        );

        let first = service.run(false).await.unwrap();
        assert_eq!(first.notified, 1);

        // Segunda corrida dentro de la ventana de cooldown: no reenvía
        let second = service.run(false).await.unwrap();
        assert_eq!(second.notified, 0);
        assert_eq!(second.skipped_cooldown, 1);
        assert_eq!(push.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_run_sin_entregas_no_persiste_cooldown() {
        let overdue = overdue_reminder();
        let reminder_id = overdue.id;
        let reminders = Arc::new(InMemoryReminders::new(vec![overdue]));
        let mut statuses = HashMap::new();
        statuses.insert(
            "https://push.example/a".to_string(),
            DeliveryStatus::TransientFailure,
        );
        let subscriptions = Arc::new(InMemorySubscriptions::new(vec![subscription(
            "https://push.example/a",
        )]));
        let push = Arc::new(MockPushClient::new(statuses));
        let service = service_with(
            reminders.clone(),
            subscriptions,
            Some(60000.0),
            push.clone(),
        );

        let first = service.run(false).await.unwrap();
        assert_eq!(first.notified, 0);
        assert_eq!(reminders.last_notification_sent(reminder_id), None);

        // El timestamp nunca se escribió, así que el próximo run reintenta
        let second = service.run(false).await.unwrap();
        assert_eq!(second.skipped_cooldown, 0);
        assert_eq!(push.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_run_elimina_suscripciones_con_fallo_permanente() {
        let overdue = overdue_reminder();
        let reminder_id = overdue.id;
        let reminders = Arc::new(InMemoryReminders::new(vec![overdue]));
        let mut statuses = HashMap::new();
        statuses.insert(
            "https://push.example/muerto".to_string(),
            DeliveryStatus::PermanentFailure,
        );
        let subscriptions = Arc::new(InMemorySubscriptions::new(vec![
            subscription("https://push.example/muerto"),
            subscription("https://push.example/vivo"),
        ]));
        let push = Arc::new(MockPushClient::new(statuses));
        let service = service_with(
            reminders.clone(),
            subscriptions.clone(),
            Some(60000.0),
            push,
        );

        let summary = service.run(false).await.unwrap();

        assert_eq!(summary.notified, 1);
        assert_eq!(summary.subscriptions_pruned, 1);
        assert_eq!(
            subscriptions.endpoints(),
            vec!["https://push.example/vivo".to_string()]
        );
        // La entrega al endpoint vivo alcanza para reiniciar el cooldown
        assert!(reminders.last_notification_sent(reminder_id).is_some());
    }
}
