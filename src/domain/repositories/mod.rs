//! Collaborator trait definitions for the domain layer.
//!
//! This module defines the interfaces through which the engine reads its two
//! external data sources (persisted settings and the live cart) plus the
//! host's shipping class directory. The engine never talks to storage or the
//! host platform directly.
//!
//! # Architecture
//!
//! - Traits define the contract for data access
//! - In-process implementations live in `crate::infrastructure::stores`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`SettingsRepository`] - Persisted fee configuration
//! - [`CartProvider`] - Live cart snapshot
//! - [`ShippingClassRepository`] - Known shipping class terms

pub mod cart_provider;
pub mod settings_repository;
pub mod shipping_class_repository;

pub use cart_provider::CartProvider;
pub use settings_repository::SettingsRepository;
pub use shipping_class_repository::ShippingClassRepository;

#[cfg(test)]
pub use cart_provider::MockCartProvider;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use shipping_class_repository::MockShippingClassRepository;
