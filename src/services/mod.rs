//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el catálogo
//! estático de tareas, el calculador puro de vencimientos y la integración
//! con la pasarela de pago.

pub mod due_status;
pub mod stripe_service;
pub mod task_catalog;

pub use due_status::*;
pub use task_catalog::{find_task, history_title, tasks_for, IntervalKind, TaskDefinition};
