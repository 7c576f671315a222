// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid URL {url:?}: {reason}. URL must be in form of absolute URL")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
