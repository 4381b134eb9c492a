pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export the request/response models for external use
pub use models::*;
pub use services::directory::DoctorDirectoryService;
