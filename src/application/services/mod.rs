//! Business logic services for the application layer.

pub mod fee_service;
pub mod settings_service;

pub use fee_service::FeeService;
pub use settings_service::SettingsService;
