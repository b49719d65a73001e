pub mod auth_routes;
pub mod billing_routes;
pub mod dashboard_routes;
pub mod maintenance_routes;
pub mod vehicle_routes;
