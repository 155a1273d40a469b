// Coordinators layer - Use-case orchestration over stores and services
pub mod admin_coordinator;
pub mod auth_coordinator;
pub mod review_coordinator;

pub use admin_coordinator::AdminCoordinator;
pub use auth_coordinator::AuthCoordinator;
pub use review_coordinator::ReviewCoordinator;
