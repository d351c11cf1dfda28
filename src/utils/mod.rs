//! Utility functions for cache key derivation and rate parsing.
//!
//! This module provides helper functions used across the application:
//!
//! - [`cache_key`] - Cart hashing and cache key construction
//! - [`rate`] - Defensive parsing of admin-entered fee rates

pub mod cache_key;
pub mod rate;
