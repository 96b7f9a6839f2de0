//! Error types for order-mailer
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The pipeline never lets one of these escape: they are turned into a
//! localized [`OrderDocument`](crate::types::OrderDocument) at the boundary.

use crate::render::ErrorKey;
use thiserror::Error;

/// The main error type for order-mailer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pipeline Errors
    // ============================================================================
    #[error("Uploaded file is empty")]
    EmptyInput,

    #[error("Could not decode upload with any of: {}", .tried.join(", "))]
    DecodeFailure { tried: Vec<String> },

    #[error("Invalid table format: {message}")]
    InvalidFormat { message: String },

    #[error("No valid order rows found")]
    NoValidRows,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Locale message key for user-facing errors.
    ///
    /// Returns `None` for faults that have no localized text; callers surface
    /// the diagnostic `Display` output instead.
    pub fn locale_key(&self) -> Option<ErrorKey> {
        match self {
            Error::EmptyInput => Some(ErrorKey::EmptyFile),
            Error::DecodeFailure { .. } => Some(ErrorKey::DecodeError),
            Error::InvalidFormat { .. } | Error::NoValidRows => Some(ErrorKey::InvalidFormat),
            _ => None,
        }
    }
}

/// Result type alias for order-mailer
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
