pub mod maintenance_log_repository;
pub mod profile_repository;
pub mod user_repository;
pub mod vehicle_repository;
