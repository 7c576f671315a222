// Target Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Target ID (UUID v4 text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute URL of a monitored website.
///
/// Only constructible through [`TargetUrl::parse`], so holding one means the
/// string has a scheme and a host. The text is kept as the caller wrote it
/// (surrounding whitespace aside) instead of the normalised form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !parsed.has_host() || parsed.host_str().is_some_and(str::is_empty) {
            return Err(DomainError::InvalidUrl {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One monitored website.
///
/// Immutable value. A new probe outcome is stored by the registry as a fresh
/// `Target` with the same `id` and `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    id: TargetId,
    url: TargetUrl,
    healthy: bool,
}

impl Target {
    pub fn new(id: TargetId, url: TargetUrl, healthy: bool) -> Self {
        Self { id, url, healthy }
    }

    pub fn id(&self) -> &TargetId {
        &self.id
    }

    pub fn url(&self) -> &TargetUrl {
        &self.url
    }

    pub fn healthy(&self) -> bool {
        self.healthy
    }
}
