//! Estadísticas de consumo y costos
//!
//! Toda la aritmética de consumo, precio promedio y amortización vive en
//! este módulo para que dashboard, historial y reportes no dupliquen las
//! fórmulas. Las funciones son puras sobre el historial de cargas ya
//! ordenado por odómetro ascendente.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::fuel_log::FuelLog;
use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;

/// Años de depreciación lineal del precio de compra para el costo amortizado
const DEPRECIATION_YEARS: i64 = 5;

/// Consumo del tramo entre dos cargas consecutivas, en km/l.
///
/// Solo es válido cuando la carga *anterior* fue tanque lleno: los litros
/// de la carga actual reponen exactamente lo consumido en el tramo.
pub fn consumption_between(previous: &FuelLog, current: &FuelLog) -> Option<f64> {
    if !previous.full_tank {
        return None;
    }

    let distance = current.odometer - previous.odometer;
    if distance <= 0.0 || current.liters <= 0.0 {
        // Odómetro no monotónico o datos degenerados: sin tramo válido
        return None;
    }

    Some(distance / current.liters)
}

/// Consumo promedio ponderado en km/l sobre los tramos válidos:
/// suma de distancias dividido suma de litros, no promedio de ratios.
pub fn average_consumption(logs: &[FuelLog]) -> Option<f64> {
    let mut total_distance = 0.0;
    let mut total_liters = 0.0;

    for pair in logs.windows(2) {
        if consumption_between(&pair[0], &pair[1]).is_some() {
            total_distance += pair[1].odometer - pair[0].odometer;
            total_liters += pair[1].liters;
        }
    }

    if total_liters > 0.0 {
        Some(total_distance / total_liters)
    } else {
        None
    }
}

/// Distancia total cubierta por el historial, en km
pub fn total_distance(logs: &[FuelLog]) -> Option<f64> {
    if logs.len() < 2 {
        return None;
    }
    Some(logs[logs.len() - 1].odometer - logs[0].odometer)
}

/// Litros totales cargados
pub fn total_liters(logs: &[FuelLog]) -> f64 {
    logs.iter().map(|log| log.liters).sum()
}

/// Gasto total en combustible
pub fn total_fuel_cost(logs: &[FuelLog]) -> Decimal {
    logs.iter().map(|log| log.total_cost).sum()
}

/// Precio promedio por litro ponderado por litros cargados
pub fn average_price_per_liter(logs: &[FuelLog]) -> Option<Decimal> {
    let liters = total_liters(logs);
    if liters <= 0.0 {
        return None;
    }
    let liters = Decimal::from_f64_retain(liters)?;
    Some(total_fuel_cost(logs) / liters)
}

/// Costo de combustible por km recorrido.
///
/// Excluye la primera carga: su combustible se consumió antes del inicio
/// de la ventana de distancia.
pub fn cost_per_km(logs: &[FuelLog]) -> Option<Decimal> {
    let distance = total_distance(logs)?;
    if distance <= 0.0 {
        return None;
    }

    let spent: Decimal = logs[1..].iter().map(|log| log.total_cost).sum();
    let distance = Decimal::from_f64_retain(distance)?;
    Some(spent / distance)
}

/// Costo por km amortizado: combustible más los costos fijos del vehículo
/// (seguro, patente y depreciación lineal del precio de compra) prorrateados
/// por los días que cubre el historial de cargas.
pub fn amortized_cost_per_km(vehicle: &Vehicle, logs: &[FuelLog]) -> Option<Decimal> {
    let distance = total_distance(logs)?;
    if distance <= 0.0 {
        return None;
    }

    let elapsed_days = logs[logs.len() - 1]
        .logged_at
        .signed_duration_since(logs[0].logged_at)
        .num_days();

    let mut fixed_per_year = Decimal::ZERO;
    if let Some(insurance) = vehicle.annual_insurance {
        fixed_per_year += insurance;
    }
    if let Some(patente) = vehicle.annual_patente {
        fixed_per_year += patente;
    }
    if let Some(price) = vehicle.purchase_price {
        fixed_per_year += price / Decimal::from(DEPRECIATION_YEARS);
    }

    let fixed = fixed_per_year * Decimal::from(elapsed_days) / Decimal::from(365);
    let fuel: Decimal = logs[1..].iter().map(|log| log.total_cost).sum();
    let distance = Decimal::from_f64_retain(distance)?;

    Some((fuel + fixed) / distance)
}

/// Costo de combustible atribuido a un viaje.
///
/// Interpola el costo por km a partir de las cargas cuyo odómetro cae
/// dentro del rango del viaje; si no hay suficientes, usa el costo por km
/// de todo el historial. Un viaje en curso (sin odómetro final) no tiene
/// costo atribuible.
pub fn trip_fuel_cost(trip: &Trip, logs: &[FuelLog]) -> Decimal {
    let Some(trip_distance) = trip.distance() else {
        return Decimal::ZERO;
    };
    if trip_distance <= 0.0 {
        return Decimal::ZERO;
    }
    let Some(end) = trip.end_odometer else {
        return Decimal::ZERO;
    };

    let in_range: Vec<&FuelLog> = logs
        .iter()
        .filter(|log| log.odometer >= trip.start_odometer && log.odometer <= end)
        .collect();

    let per_km = if in_range.len() >= 2 {
        let span = in_range[in_range.len() - 1].odometer - in_range[0].odometer;
        let spent: Decimal = in_range[1..].iter().map(|log| log.total_cost).sum();
        if span > 0.0 {
            Decimal::from_f64_retain(span).map(|span| spent / span)
        } else {
            None
        }
    } else {
        cost_per_km(logs)
    };

    match (per_km, Decimal::from_f64_retain(trip_distance)) {
        (Some(per_km), Some(distance)) => per_km * distance,
        _ => Decimal::ZERO,
    }
}

/// Total de gastos itemizados de un viaje
pub fn trip_expenses_total(trip: &Trip) -> Decimal {
    trip.expenses.0.iter().map(|expense| expense.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn log(odometer: f64, liters: f64, cost: &str, full_tank: bool, day: i64) -> FuelLog {
        FuelLog {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::nil(),
            odometer,
            liters,
            total_cost: cost.parse().unwrap(),
            price_per_liter: Decimal::ZERO,
            full_tank,
            exchange_rate: None,
            logged_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day),
            created_at: Utc::now(),
        }
    }

    fn trip(start: f64, end: Option<f64>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::nil(),
            description: "viaje".to_string(),
            start_odometer: start,
            end_odometer: end,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: None,
            expenses: Json(vec![]),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_consumo_requiere_tanque_lleno_previo() {
        let previous = log(50000.0, 30.0, "30000", false, 0);
        let current = log(50400.0, 40.0, "40000", true, 5);
        assert_eq!(consumption_between(&previous, &current), None);

        let previous = log(50000.0, 30.0, "30000", true, 0);
        let consumption = consumption_between(&previous, &current).unwrap();
        assert!((consumption - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_consumo_odometro_no_monotonico() {
        let previous = log(50400.0, 30.0, "30000", true, 0);
        let current = log(50000.0, 40.0, "40000", true, 5);
        assert_eq!(consumption_between(&previous, &current), None);
    }

    #[test]
    fn test_consumo_promedio_ponderado() {
        // Dos tramos: 400 km / 40 l y 200 km / 10 l.
        // Ponderado: 600 / 50 = 12 km/l (promedio de ratios daría 15).
        let logs = vec![
            log(50000.0, 35.0, "35000", true, 0),
            log(50400.0, 40.0, "40000", true, 5),
            log(50600.0, 10.0, "10000", true, 8),
        ];
        let avg = average_consumption(&logs).unwrap();
        assert!((avg - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_consumo_promedio_ignora_tramos_invalidos() {
        let logs = vec![
            log(50000.0, 35.0, "35000", false, 0),
            log(50400.0, 40.0, "40000", true, 5),
            log(50600.0, 10.0, "10000", true, 8),
        ];
        // Solo el segundo tramo es válido: 200 km / 10 l
        let avg = average_consumption(&logs).unwrap();
        assert!((avg - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_consumo_promedio_sin_tramos() {
        let logs = vec![log(50000.0, 35.0, "35000", true, 0)];
        assert_eq!(average_consumption(&logs), None);
    }

    #[test]
    fn test_precio_promedio_ponderado_por_litros() {
        let logs = vec![
            log(50000.0, 30.0, "30000", true, 0),
            log(50400.0, 10.0, "20000", true, 5),
        ];
        // 50000 / 40 litros = 1250
        let price = average_price_per_liter(&logs).unwrap();
        assert_eq!(price, Decimal::from(1250));
    }

    #[test]
    fn test_costo_por_km_excluye_primera_carga() {
        let logs = vec![
            log(50000.0, 30.0, "99999", true, 0),
            log(50400.0, 40.0, "40000", true, 5),
        ];
        // 40000 / 400 km = 100
        let cost = cost_per_km(&logs).unwrap();
        assert_eq!(cost, Decimal::from(100));
    }

    #[test]
    fn test_costo_por_km_sin_historial() {
        assert_eq!(cost_per_km(&[]), None);
        assert_eq!(cost_per_km(&[log(50000.0, 30.0, "30000", true, 0)]), None);
    }

    #[test]
    fn test_costo_amortizado_incluye_fijos_prorrateados() {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name: "auto".to_string(),
            make: None,
            model: None,
            year: None,
            tank_capacity: None,
            average_consumption: None,
            purchase_price: None,
            annual_insurance: Some(Decimal::from(365000)),
            annual_patente: None,
            created_at: Utc::now(),
        };
        // 365 días de historial: el seguro entra completo.
        let logs = vec![
            log(50000.0, 30.0, "0", true, 0),
            log(51000.0, 40.0, "100000", true, 365),
        ];
        // (100000 + 365000) / 1000 km = 465
        let cost = amortized_cost_per_km(&vehicle, &logs).unwrap();
        assert_eq!(cost, Decimal::from(465));
    }

    #[test]
    fn test_costo_viaje_interpola_logs_en_rango() {
        let logs = vec![
            log(40000.0, 30.0, "77777", true, 0),
            log(50000.0, 30.0, "30000", true, 10),
            log(50200.0, 20.0, "20000", true, 12),
            log(50400.0, 20.0, "20000", true, 14),
            log(60000.0, 30.0, "88888", true, 20),
        ];
        let trip = trip(50000.0, Some(50400.0));
        // En rango: cargas en 50000, 50200 y 50400. Gasto 40000 sobre 400 km
        // de span -> 100/km * 400 km de viaje = 40000.
        let cost = trip_fuel_cost(&trip, &logs);
        assert_eq!(cost, Decimal::from(40000));
    }

    #[test]
    fn test_costo_viaje_fallback_sin_logs_en_rango() {
        let logs = vec![
            log(40000.0, 30.0, "0", true, 0),
            log(41000.0, 40.0, "100000", true, 5),
        ];
        let trip = trip(50000.0, Some(50100.0));
        // Fallback: 100000 / 1000 km = 100/km * 100 km = 10000
        let cost = trip_fuel_cost(&trip, &logs);
        assert_eq!(cost, Decimal::from(10000));
    }

    #[test]
    fn test_costo_viaje_en_curso_es_cero() {
        let logs = vec![
            log(40000.0, 30.0, "0", true, 0),
            log(41000.0, 40.0, "100000", true, 5),
        ];
        let cost = trip_fuel_cost(&trip(50000.0, None), &logs);
        assert_eq!(cost, Decimal::ZERO);
    }
}
