use async_trait::async_trait;

use crate::error::*;

pub use reqwest::Url;

pub type LocalDateTime = chrono::DateTime<chrono::Local>;

/// One token issued by the backend.
/// `fingerprint` is safe to cache and display; `secret` is the token itself.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Credential {
    pub fingerprint: String,
    pub secret: String,
    pub timestamp: Option<String>,
}

impl Credential {
    pub fn new<S1, S2>(fingerprint: S1, secret: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            fingerprint: fingerprint.into(),
            secret: secret.into(),
            timestamp: None,
        }
    }

    /// Issue time reported by the backend, converted to local time.
    /// `None` if absent or not RFC 3339.
    pub fn issued_at(&self) -> Option<LocalDateTime> {
        let ts = self.timestamp.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(ts)
            .ok()
            .map(|t| t.with_timezone(&chrono::Local))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Where credentials come from, for log messages.
    fn endpoint(&self) -> String;

    async fn fetch_credential(&self) -> Result<Credential>;
}
