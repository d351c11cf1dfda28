//! # Handling Fees
//!
//! A tiered per-shipping-class handling fee engine for e-commerce checkouts.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, collaborator traits,
//!   and the pure fee calculator
//! - **Application Layer** ([`application`]) - Fee application and settings
//!   sanitization services
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends and in-process
//!   collaborator implementations
//!
//! ## Features
//!
//! - Per-class quantity tiers with top-tier saturation
//! - Exclusive (non-stacking) fee classes
//! - Fail-open result and settings caching (Redis or in-process)
//! - Admin settings sanitization against the host's shipping class taxonomy
//! - A checkout path that degrades instead of failing
//!
//! ## Quick Start
//!
//! ```no_run
//! use handling_fees::infrastructure::cache::NullCache;
//! use handling_fees::infrastructure::stores::MemorySettingsRepository;
//! use handling_fees::prelude::*;
//! use std::sync::Arc;
//!
//! # #[derive(Clone)] struct HostCart;
//! # #[async_trait::async_trait]
//! # impl handling_fees::domain::repositories::CartProvider for HostCart {
//! #     async fn line_items(&self) -> Result<Vec<CartLineItem>, FeeError> { Ok(vec![]) }
//! # }
//! # async fn wire() {
//! let settings = Arc::new(MemorySettingsRepository::new());
//! let cart = Arc::new(HostCart);
//! let cache = Arc::new(NullCache::new());
//!
//! let fees = FeeService::new(settings, cart, cache, 300, 3600);
//!
//! // Inside the host's shipping-rate hook:
//! let adjusted = fees.apply_handling_fees("10.00".parse().unwrap(), "flat_rate:1").await;
//! # let _ = adjusted;
//! # }
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration (cache backend, TTLs, logging) is loaded from
//! environment variables via [`config::Config`]. See [`config`] module for
//! available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::FeeError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FeeService, SettingsService};
    pub use crate::domain::calculator::compute_handling_fee;
    pub use crate::domain::entities::{
        CartLineItem, ClassFeeConfig, FeeConfiguration, ShippingClass,
    };
    pub use crate::error::FeeError;
}
