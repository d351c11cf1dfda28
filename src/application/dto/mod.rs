//! Data Transfer Objects for admin-facing operations.
//!
//! DTOs carry raw, untrusted input into the application layer, where it is
//! validated and sanitized before touching the domain model.

pub mod settings;

pub use settings::{ClassSettingsInput, SettingsInput, is_valid_slug};
