//! Calculador de vencimientos de mantenimiento
//!
//! Función pura que, dada la definición de una tarea, el kilometraje actual
//! del vehículo y su historial de registros, devuelve cuánto falta (o cuánto
//! se ha pasado) para el próximo servicio. No toca base de datos ni reloj:
//! la fecha de evaluación se pasa como parámetro para que el resultado sea
//! determinista y testeable.
//!
//! Sin historial no se inventa un punto de partida: se devuelve el texto por
//! defecto de la tarea tal cual.

use chrono::NaiveDate;
use serde::Serialize;

use crate::services::task_catalog::{IntervalKind, TaskDefinition};

/// Punto de servicio mínimo que necesita el calculador: fecha y kilometraje
/// del registro. Los controllers lo proyectan desde MaintenanceLog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub date: NaiveDate,
    pub odometer_km: i64,
}

/// Estado de vencimiento derivado para una tarea. No se persiste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueStatus {
    /// Km o días restantes según la clase de intervalo; negativo = vencido.
    /// None cuando no hay historial y se muestra el texto por defecto.
    pub remaining: Option<i64>,
    pub display_text: String,
}

/// Calcular el estado de vencimiento de una tarea.
pub fn due_status(
    task: &TaskDefinition,
    current_odometer_km: i64,
    history: &[ServiceRecord],
    today: NaiveDate,
) -> DueStatus {
    match task.interval_kind {
        IntervalKind::Distance => distance_due(task, current_odometer_km, history),
        IntervalKind::Time => time_due(task, history, today),
    }
}

fn distance_due(
    task: &TaskDefinition,
    current_odometer_km: i64,
    history: &[ServiceRecord],
) -> DueStatus {
    let Some(last) = select_by_odometer(history) else {
        return DueStatus {
            remaining: None,
            display_text: task.default_text.to_string(),
        };
    };

    // km_since puede ser negativo si el cuentakilómetros retrocedió o hay un
    // registro erróneo; se pasa tal cual sin corregir.
    let km_since = current_odometer_km - last.odometer_km;
    let remaining_km = task.interval_value - km_since;

    let display_text = if remaining_km < 0 {
        format!("Overdue by {} KM", format_thousands(-remaining_km))
    } else {
        format!("{} KM", format_thousands(remaining_km))
    };

    DueStatus {
        remaining: Some(remaining_km),
        display_text,
    }
}

fn time_due(task: &TaskDefinition, history: &[ServiceRecord], today: NaiveDate) -> DueStatus {
    let Some(last) = select_by_date(history) else {
        return DueStatus {
            remaining: None,
            display_text: task.default_text.to_string(),
        };
    };

    let days_since = (today - last.date).num_days().abs();
    let remaining_days = task.interval_value * 365 - days_since;

    let display_text = if remaining_days < 0 {
        "Overdue (time-based)".to_string()
    } else if remaining_days < 30 {
        format!("{} days remaining", remaining_days)
    } else {
        format!("{} months remaining", remaining_days / 30)
    };

    DueStatus {
        remaining: Some(remaining_days),
        display_text,
    }
}

/// Seleccionar el registro con mayor kilometraje; los empates se resuelven
/// por fecha más reciente para que la selección sea determinista.
pub fn select_by_odometer(history: &[ServiceRecord]) -> Option<&ServiceRecord> {
    history.iter().max_by_key(|r| (r.odometer_km, r.date))
}

/// Seleccionar el registro más reciente por fecha; los empates se resuelven
/// por mayor kilometraje.
pub fn select_by_date(history: &[ServiceRecord]) -> Option<&ServiceRecord> {
    history.iter().max_by_key(|r| (r.date, r.odometer_km))
}

/// Formatear un entero no negativo con separador de miles estilo es-ES:
/// 5000 -> "5.000"
fn format_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleType;
    use crate::services::task_catalog::find_task;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, km: i64) -> ServiceRecord {
        ServiceRecord {
            date: date(y, m, d),
            odometer_km: km,
        }
    }

    fn oil_task() -> &'static TaskDefinition {
        // Distancia, 15.000 km
        find_task(VehicleType::Car, "oil").unwrap()
    }

    fn brake_fluid_task() -> &'static TaskDefinition {
        // Tiempo, 2 años
        find_task(VehicleType::Car, "brake_fluid").unwrap()
    }

    #[test]
    fn test_empty_history_returns_default_text() {
        let today = date(2025, 8, 25);
        let status = due_status(oil_task(), 20_000, &[], today);
        assert_eq!(status.remaining, None);
        assert_eq!(status.display_text, "15.000 KM");

        let status = due_status(brake_fluid_task(), 20_000, &[], today);
        assert_eq!(status.remaining, None);
        assert_eq!(status.display_text, "2 Años");
    }

    #[test]
    fn test_distance_remaining_midway_through_interval() {
        // Intervalo 15.000 km, último servicio a 10.000, actual 20.000
        let history = [record(2024, 1, 10, 10_000)];
        let status = due_status(oil_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(5_000));
        assert_eq!(status.display_text, "5.000 KM");
    }

    #[test]
    fn test_distance_exact_interval_is_zero_not_overdue() {
        let history = [record(2024, 1, 10, 5_000)];
        let status = due_status(oil_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(0));
        assert_eq!(status.display_text, "0 KM");
    }

    #[test]
    fn test_distance_overdue_shows_exact_excess() {
        // 22.000 km desde el servicio con intervalo de 15.000 -> 7.000 de exceso
        let history = [record(2023, 5, 1, 3_000)];
        let status = due_status(oil_task(), 25_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(-7_000));
        assert_eq!(status.display_text, "Overdue by 7.000 KM");
    }

    #[test]
    fn test_distance_negative_km_since_passes_through() {
        // Registro con más km que el vehículo (cuentakilómetros retrocedido):
        // no se corrige, el restante simplemente crece.
        let history = [record(2024, 6, 1, 30_000)];
        let status = due_status(oil_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(25_000));
        assert_eq!(status.display_text, "25.000 KM");
    }

    #[test]
    fn test_distance_uses_max_odometer_entry() {
        let history = [
            record(2024, 1, 1, 12_000),
            record(2023, 6, 1, 18_000),
            record(2024, 3, 1, 15_000),
        ];
        // Gana la de 18.000 km aunque su fecha sea la más antigua
        let status = due_status(oil_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(13_000));
    }

    #[test]
    fn test_tie_break_same_odometer_selects_later_date() {
        let a = record(2024, 1, 1, 15_000);
        let b = record(2024, 6, 1, 15_000);
        assert_eq!(select_by_odometer(&[a, b]), Some(&b));
        assert_eq!(select_by_odometer(&[b, a]), Some(&b));
    }

    #[test]
    fn test_time_overdue_past_interval() {
        // Intervalo 2 años, último servicio hace 3 años exactos
        let history = [record(2022, 8, 25, 10_000)];
        let status = due_status(brake_fluid_task(), 20_000, &history, date(2025, 8, 25));
        assert!(status.remaining.unwrap() < 0);
        assert_eq!(status.display_text, "Overdue (time-based)");
    }

    #[test]
    fn test_time_months_remaining() {
        // Intervalo 2 años, servicio hace 375 días -> 730 - 375 = 355 días
        // -> floor(355/30) = 11 meses
        let history = [record(2024, 8, 15, 10_000)];
        let status = due_status(brake_fluid_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(355));
        assert_eq!(status.display_text, "11 months remaining");
    }

    #[test]
    fn test_time_days_remaining_under_30() {
        // 705 días transcurridos con intervalo de 2 años -> quedan 25 días
        let history = [record(2023, 9, 20, 10_000)];
        let status = due_status(brake_fluid_task(), 20_000, &history, date(2025, 8, 25));
        assert_eq!(status.remaining, Some(25));
        assert_eq!(status.display_text, "25 days remaining");
    }

    #[test]
    fn test_time_uses_most_recent_date() {
        let history = [
            record(2023, 1, 1, 30_000),
            record(2024, 8, 15, 10_000),
            record(2022, 5, 5, 40_000),
        ];
        let status = due_status(brake_fluid_task(), 50_000, &history, date(2025, 8, 25));
        // Selecciona 2024-08-15 aunque otros registros tengan más km
        assert_eq!(status.remaining, Some(355));
    }

    #[test]
    fn test_time_tie_break_same_date_selects_higher_odometer() {
        let a = record(2024, 8, 15, 10_000);
        let b = record(2024, 8, 15, 12_000);
        assert_eq!(select_by_date(&[a, b]), Some(&b));
        assert_eq!(select_by_date(&[b, a]), Some(&b));
    }

    #[test]
    fn test_idempotence() {
        let history = [record(2024, 1, 10, 10_000), record(2024, 8, 15, 14_000)];
        let today = date(2025, 8, 25);
        let first = due_status(oil_task(), 20_000, &history, today);
        let second = due_status(oil_task(), 20_000, &history, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1.000");
        assert_eq!(format_thousands(15_000), "15.000");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
    }
}
