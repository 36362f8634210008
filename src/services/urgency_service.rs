//! Clasificador de urgencia de recordatorios
//!
//! Única fuente de verdad para derivar vencido/urgente a partir de los
//! campos de vencimiento de un recordatorio y el odómetro actual del
//! vehículo. Todos los consumidores (listados REST y el job de
//! notificaciones) pasan por acá para que la lógica no se duplique.

use chrono::NaiveDate;

/// Umbrales configurables de urgencia
#[derive(Debug, Clone)]
pub struct UrgencyThresholds {
    /// Margen en km por debajo del cual un recordatorio pendiente es urgente
    pub km: f64,
    /// Margen en días por debajo del cual un recordatorio pendiente es urgente
    pub days: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self { km: 1000.0, days: 15 }
    }
}

/// Resultado de la clasificación. `is_overdue` e `is_urgent` son
/// mutuamente excluyentes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrgencyAssessment {
    pub kms_remaining: Option<f64>,
    pub days_remaining: Option<i64>,
    pub is_overdue: bool,
    pub is_urgent: bool,
}

/// Clasificar un recordatorio contra el odómetro actual y la fecha de hoy.
///
/// Un recordatorio sin odómetro ni fecha de vencimiento nunca es urgente
/// ni vencido.
pub fn assess(
    due_odometer: Option<f64>,
    due_date: Option<NaiveDate>,
    current_odometer: f64,
    today: NaiveDate,
    thresholds: &UrgencyThresholds,
) -> UrgencyAssessment {
    let kms_remaining = due_odometer.map(|due| due - current_odometer);
    let days_remaining = due_date.map(|due| due.signed_duration_since(today).num_days());

    let is_overdue = kms_remaining.map(|kms| kms < 0.0).unwrap_or(false)
        || days_remaining.map(|days| days < 0).unwrap_or(false);

    let is_urgent = !is_overdue
        && (kms_remaining.map(|kms| kms <= thresholds.km).unwrap_or(false)
            || days_remaining
                .map(|days| days <= thresholds.days)
                .unwrap_or(false));

    UrgencyAssessment {
        kms_remaining,
        days_remaining,
        is_overdue,
        is_urgent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_sin_vencimientos_nunca_urgente_ni_vencido() {
        let result = assess(None, None, 50000.0, today(), &UrgencyThresholds::default());
        assert!(!result.is_overdue);
        assert!(!result.is_urgent);
        assert_eq!(result.kms_remaining, None);
        assert_eq!(result.days_remaining, None);
    }

    #[test]
    fn test_urgente_por_odometro_dentro_del_umbral() {
        // dueOdometer = currentOdometer + 500, umbral 1000 km
        let result = assess(
            Some(50500.0),
            None,
            50000.0,
            today(),
            &UrgencyThresholds::default(),
        );
        assert!(result.is_urgent);
        assert!(!result.is_overdue);
        assert_eq!(result.kms_remaining, Some(500.0));
    }

    #[test]
    fn test_vencido_por_odometro() {
        let result = assess(
            Some(49000.0),
            None,
            50000.0,
            today(),
            &UrgencyThresholds::default(),
        );
        assert!(result.is_overdue);
        assert!(!result.is_urgent);
        assert_eq!(result.kms_remaining, Some(-1000.0));
    }

    #[test]
    fn test_normal_por_odometro_lejano() {
        let result = assess(
            Some(60000.0),
            None,
            50000.0,
            today(),
            &UrgencyThresholds::default(),
        );
        assert!(!result.is_overdue);
        assert!(!result.is_urgent);
    }

    #[test]
    fn test_vencido_por_fecha_sin_odometro() {
        let due = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let result = assess(None, Some(due), 50000.0, today(), &UrgencyThresholds::default());
        assert!(result.is_overdue);
        assert!(!result.is_urgent);
        assert_eq!(result.days_remaining, Some(-14));
    }

    #[test]
    fn test_urgente_por_fecha_dentro_del_umbral() {
        let due = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
        let result = assess(None, Some(due), 50000.0, today(), &UrgencyThresholds::default());
        assert!(result.is_urgent);
        assert!(!result.is_overdue);
        assert_eq!(result.days_remaining, Some(10));
    }

    #[test]
    fn test_vencido_y_urgente_mutuamente_excluyentes() {
        // Odómetro vencido pero fecha dentro del umbral: gana vencido
        let due = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
        let result = assess(
            Some(49000.0),
            Some(due),
            50000.0,
            today(),
            &UrgencyThresholds::default(),
        );
        assert!(result.is_overdue);
        assert!(!result.is_urgent);
    }

    #[test]
    fn test_umbral_personalizado() {
        let thresholds = UrgencyThresholds { km: 200.0, days: 3 };
        let result = assess(Some(50500.0), None, 50000.0, today(), &thresholds);
        assert!(!result.is_urgent);
        assert!(!result.is_overdue);
    }
}
