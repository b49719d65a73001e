//! Catálogo estático de tareas de mantenimiento
//!
//! Tabla de configuración pura: cada tipo de vehículo tiene su lista fija
//! de tareas con intervalo (por distancia o por tiempo) y metadatos de
//! presentación que el cliente usa tal cual. Nunca se muta en runtime.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::models::vehicle::VehicleType;

/// Clase de intervalo de una tarea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    /// Recurre por kilómetros recorridos
    Distance,
    /// Recurre por años transcurridos
    Time,
}

/// Definición de una tarea de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct TaskDefinition {
    /// Clave única dentro del tipo de vehículo
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
    pub interval_kind: IntervalKind,
    /// Kilómetros si es Distance, años si es Time. Siempre positivo.
    pub interval_value: i64,
    /// Texto mostrado cuando no hay historial para la tarea
    pub default_text: &'static str,
}

lazy_static! {
    static ref CAR_TASKS: Vec<TaskDefinition> = vec![
        TaskDefinition {
            key: "oil",
            title: "Aceite de Motor",
            subtitle: "Sustitución lubricante",
            icon: "oil_barrel",
            color: "text-orange-600",
            bg: "bg-orange-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 15_000,
            default_text: "15.000 KM",
        },
        TaskDefinition {
            key: "filters_car",
            title: "Filtros",
            subtitle: "Aceite, Aire...",
            icon: "filter_alt",
            color: "text-yellow-600",
            bg: "bg-yellow-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 15_000,
            default_text: "15.000 KM",
        },
        TaskDefinition {
            key: "tyres_car",
            title: "Neumáticos",
            subtitle: "Rotación o cambio",
            icon: "tire_repair",
            color: "text-blue-600",
            bg: "bg-blue-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 40_000,
            default_text: "40.000 KM",
        },
        TaskDefinition {
            key: "brake_fluid",
            title: "Líquido de Frenos",
            subtitle: "Cambio periódico",
            icon: "water_drop",
            color: "text-purple-600",
            bg: "bg-purple-50",
            interval_kind: IntervalKind::Time,
            interval_value: 2,
            default_text: "2 Años",
        },
        TaskDefinition {
            key: "timing_belt",
            title: "Kit Distribución",
            subtitle: "Correa y rodillos",
            icon: "settings",
            color: "text-red-600",
            bg: "bg-red-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 100_000,
            default_text: "100.000 KM",
        },
        TaskDefinition {
            key: "adblue",
            title: "AdBlue",
            subtitle: "Relleno de depósito",
            icon: "local_gas_station",
            color: "text-cyan-600",
            bg: "bg-cyan-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 10_000,
            default_text: "10.000 KM",
        },
    ];

    static ref MOTO_TASKS: Vec<TaskDefinition> = vec![
        TaskDefinition {
            key: "tire_front",
            title: "Neumático Delantero",
            subtitle: "Desgaste y presión",
            icon: "trip_origin",
            color: "text-blue-600",
            bg: "bg-blue-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 15_000,
            default_text: "15.000 KM",
        },
        TaskDefinition {
            key: "tire_rear",
            title: "Neumático Trasero",
            subtitle: "Desgaste y presión",
            icon: "tire_repair",
            color: "text-blue-700",
            bg: "bg-blue-100",
            interval_kind: IntervalKind::Distance,
            interval_value: 10_000,
            default_text: "10.000 KM",
        },
        TaskDefinition {
            key: "brake_fluid_moto",
            title: "Líquido de Frenos",
            subtitle: "Cambio periódico",
            icon: "water_drop",
            color: "text-purple-600",
            bg: "bg-purple-50",
            interval_kind: IntervalKind::Time,
            interval_value: 2,
            default_text: "2 Años",
        },
        TaskDefinition {
            key: "brake_pads_moto",
            title: "Pastillas de Freno",
            subtitle: "Desgaste",
            icon: "disc_full",
            color: "text-red-600",
            bg: "bg-red-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 15_000,
            default_text: "15.000 KM",
        },
        TaskDefinition {
            key: "battery_moto",
            title: "Batería",
            subtitle: "Carga y bornes",
            icon: "battery_charging_full",
            color: "text-yellow-600",
            bg: "bg-yellow-50",
            interval_kind: IntervalKind::Time,
            interval_value: 3,
            default_text: "3-4 Años",
        },
        TaskDefinition {
            key: "engine_oil_moto",
            title: "Aceite de Motor",
            subtitle: "Sustitución lubricante",
            icon: "oil_barrel",
            color: "text-orange-600",
            bg: "bg-orange-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 10_000,
            default_text: "10.000 KM",
        },
        TaskDefinition {
            key: "chain_kit",
            title: "Kit de Arrastre",
            subtitle: "Cadena, piñón y corona",
            icon: "link",
            color: "text-gray-600",
            bg: "bg-gray-100",
            interval_kind: IntervalKind::Distance,
            interval_value: 25_000,
            default_text: "25.000 KM",
        },
        TaskDefinition {
            key: "fork_oil",
            title: "Aceite Horquilla",
            subtitle: "Amortiguación",
            icon: "height",
            color: "text-green-600",
            bg: "bg-green-50",
            interval_kind: IntervalKind::Distance,
            interval_value: 30_000,
            default_text: "30.000 KM",
        },
    ];
}

/// Obtener el catálogo de tareas para un tipo de vehículo
pub fn tasks_for(vehicle_type: VehicleType) -> &'static [TaskDefinition] {
    match vehicle_type {
        VehicleType::Car => &CAR_TASKS,
        VehicleType::Moto => &MOTO_TASKS,
    }
}

/// Buscar una tarea por clave dentro del catálogo de un tipo de vehículo
pub fn find_task(vehicle_type: VehicleType, key: &str) -> Option<&'static TaskDefinition> {
    tasks_for(vehicle_type).iter().find(|t| t.key == key)
}

/// Buscar el título de una tarea en cualquier catálogo (para el historial
/// global, donde se mezclan registros de coches y motos)
pub fn task_title(key: &str) -> Option<&'static str> {
    CAR_TASKS
        .iter()
        .chain(MOTO_TASKS.iter())
        .find(|t| t.key == key)
        .map(|t| t.title)
}

/// Título legible de un registro de historial según la tarea y sus notas.
/// Las notas guardan el subtipo (p. ej. qué filtro se cambió).
pub fn history_title(task_key: &str, notes: Option<&str>) -> String {
    let title = task_title(task_key).unwrap_or(task_key);
    let lower = title.to_lowercase();

    if let Some(sub_type) = notes.filter(|n| !n.trim().is_empty()) {
        if lower.contains("filtros") {
            return format!("Cambio de Filtro: {}", sub_type);
        }
        return format!("Cambio: {}", sub_type);
    }

    if lower.contains("adblue") {
        return "Relleno de AdBlue".to_string();
    }
    if lower.contains("engrase") || lower.contains("cadena") {
        return "Engrase realizado".to_string();
    }
    format!("Sustitución: {}", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_have_between_3_and_8_tasks() {
        assert!((3..=8).contains(&tasks_for(VehicleType::Car).len()));
        assert!((3..=8).contains(&tasks_for(VehicleType::Moto).len()));
    }

    #[test]
    fn test_keys_unique_per_vehicle_type() {
        for vt in [VehicleType::Car, VehicleType::Moto] {
            let tasks = tasks_for(vt);
            for (i, task) in tasks.iter().enumerate() {
                assert!(
                    tasks.iter().skip(i + 1).all(|t| t.key != task.key),
                    "clave duplicada: {}",
                    task.key
                );
            }
        }
    }

    #[test]
    fn test_interval_values_positive() {
        for task in tasks_for(VehicleType::Car)
            .iter()
            .chain(tasks_for(VehicleType::Moto))
        {
            assert!(task.interval_value > 0, "intervalo inválido en {}", task.key);
        }
    }

    #[test]
    fn test_find_task_scoped_by_type() {
        assert!(find_task(VehicleType::Car, "oil").is_some());
        assert!(find_task(VehicleType::Moto, "oil").is_none());
        assert!(find_task(VehicleType::Moto, "tire_front").is_some());
    }

    #[test]
    fn test_history_title_with_notes() {
        assert_eq!(
            history_title("filters_car", Some("Aceite")),
            "Cambio de Filtro: Aceite"
        );
        assert_eq!(history_title("oil", Some("5W30")), "Cambio: 5W30");
    }

    #[test]
    fn test_history_title_without_notes() {
        assert_eq!(history_title("adblue", None), "Relleno de AdBlue");
        assert_eq!(history_title("oil", None), "Sustitución: Aceite de Motor");
        assert_eq!(history_title("oil", Some("  ")), "Sustitución: Aceite de Motor");
    }

    #[test]
    fn test_history_title_unknown_key_falls_back_to_key() {
        assert_eq!(history_title("desmo", None), "Sustitución: desmo");
    }
}
