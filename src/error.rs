//! Error types for the server launcher
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the server launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LauncherError {
    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a new process error carrying the underlying I/O failure
    pub fn process_with_source(
        command: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LauncherError>;
