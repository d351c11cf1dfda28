use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum FeeError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Storage { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl FeeError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable error code, mirrored in log output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Storage { .. } => "storage_error",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl fmt::Display for FeeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Storage { message, details }
            | Self::Internal { message, details } => (message, details),
        };
        write!(f, "{}: {} ({})", self.code(), message, details)
    }
}

impl std::error::Error for FeeError {}
