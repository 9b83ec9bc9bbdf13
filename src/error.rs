//! Unified error types for the generator.

use std::fmt;

/// Generator-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error listing the target directory
    DirectoryScan(String),
    /// Error writing the generated document
    OutputWrite(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryScan(msg) => write!(f, "directory scan failed: {}", msg),
            AppError::OutputWrite(msg) => write!(f, "output write failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
