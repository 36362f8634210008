use crate::models::reminder::ServiceReminder;
use crate::utils::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReminderRepository {
    pool: PgPool,
}

impl ReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        title: String,
        notes: Option<String>,
        due_odometer: Option<f64>,
        due_date: Option<NaiveDate>,
    ) -> Result<ServiceReminder, AppError> {
        let reminder = sqlx::query_as::<_, ServiceReminder>(
            r#"
            INSERT INTO service_reminders (id, vehicle_id, title, notes, due_odometer, due_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(title)
        .bind(notes)
        .bind(due_odometer)
        .bind(due_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(reminder)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceReminder>, AppError> {
        let reminder =
            sqlx::query_as::<_, ServiceReminder>("SELECT * FROM service_reminders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reminder)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceReminder>, AppError> {
        let reminders = sqlx::query_as::<_, ServiceReminder>(
            "SELECT * FROM service_reminders WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    /// Todos los recordatorios abiertos (sin completar) de todos los vehículos.
    /// Es la entrada del scanner del job de notificaciones.
    pub async fn find_open(&self) -> Result<Vec<ServiceReminder>, AppError> {
        let reminders = sqlx::query_as::<_, ServiceReminder>(
            "SELECT * FROM service_reminders WHERE completed_date IS NULL",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        notes: Option<String>,
        due_odometer: Option<f64>,
        due_date: Option<NaiveDate>,
    ) -> Result<ServiceReminder, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        let reminder = sqlx::query_as::<_, ServiceReminder>(
            r#"
            UPDATE service_reminders
            SET title = $2, notes = $3, due_odometer = $4, due_date = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(notes.or(current.notes))
        .bind(due_odometer.or(current.due_odometer))
        .bind(due_date.or(current.due_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(reminder)
    }

    /// Registrar el completado de un service
    pub async fn complete(
        &self,
        id: Uuid,
        completed_date: NaiveDate,
        completed_odometer: Option<f64>,
        completed_cost: Option<Decimal>,
        completed_location: Option<String>,
    ) -> Result<ServiceReminder, AppError> {
        let reminder = sqlx::query_as::<_, ServiceReminder>(
            r#"
            UPDATE service_reminders
            SET completed_date = $2, completed_odometer = $3, completed_cost = $4,
                completed_location = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(completed_date)
        .bind(completed_odometer)
        .bind(completed_cost)
        .bind(completed_location)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        Ok(reminder)
    }

    /// Persistir el timestamp de cooldown después de un envío exitoso
    pub async fn update_last_notification_sent(
        &self,
        id: Uuid,
        sent_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE service_reminders SET last_notification_sent = $2 WHERE id = $1")
            .bind(id)
            .bind(sent_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM service_reminders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Recordatorio no encontrado".to_string()));
        }

        Ok(())
    }
}
