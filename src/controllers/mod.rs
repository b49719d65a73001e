pub mod auth_controller;
pub mod billing_controller;
pub mod dashboard_controller;
pub mod maintenance_controller;
pub mod vehicle_controller;
