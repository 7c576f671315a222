// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Probe failures are deliberately absent: an unreachable website is
/// reported as `healthy = false`, never as an error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for rejected (non-absolute) URLs
    pub fn is_invalid_url(&self) -> bool {
        matches!(
            self,
            AppError::Domain(crate::domain::DomainError::InvalidUrl { .. })
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
