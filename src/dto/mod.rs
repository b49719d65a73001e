pub mod auth_dto;
pub mod billing_dto;
pub mod maintenance_dto;
pub mod vehicle_dto;
