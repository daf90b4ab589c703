//! Core error types

use thiserror::Error;

/// Errors produced while interpreting core values from configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Hex color string could not be parsed
    #[error("Invalid hex color `{0}` (expected #RRGGBB or #RRGGBBAA)")]
    InvalidHexColor(String),

    /// Platform name is not one of the known platforms
    #[error("Unknown platform `{0}` (expected ios, android or desktop)")]
    UnknownPlatform(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
