//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod maintenance_log;
pub mod profile;
pub mod user;
pub mod vehicle;
