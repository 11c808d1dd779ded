//! Layered error definitions
//!
//! Categorized by lifecycle phase: validation / binding / read / dispatch.

use thiserror::Error;

/// Unified error type for component operations
#[derive(Debug, Error)]
pub enum ComponentError {
    // ===== Configuration Errors =====
    /// Configuration validation error, reported before any binding occurs
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Binding Errors =====
    /// Dependency resolution error during (re)configuration
    #[error("binding error for dependency '{dependency}': {message}")]
    Binding { dependency: String, message: String },

    // ===== Read Errors =====
    /// Upstream read failure
    #[error("read error from sensor '{sensor}': {message}")]
    Read { sensor: String, message: String },

    /// Upstream reading lacks a required entry
    #[error("reading is missing required numeric entry '{field}'")]
    MissingReading { field: String },

    // ===== Dispatch Errors =====
    /// Operation the component does not implement
    #[error("operation '{operation}' is not implemented")]
    Unsupported { operation: String },

    /// No implementation registered under the requested model
    #[error("no model registered for '{model}'")]
    ModelNotFound { model: String },

    // ===== General Errors =====
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ComponentError {
    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create binding error
    pub fn binding(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Binding {
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    /// Create read error
    pub fn read(sensor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            sensor: sensor.into(),
            message: message.into(),
        }
    }

    /// Create missing-reading error
    pub fn missing_reading(field: impl Into<String>) -> Self {
        Self::MissingReading {
            field: field.into(),
        }
    }

    /// Create unsupported-operation error
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }
}
