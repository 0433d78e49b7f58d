use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the ClassifAI client.
///
/// The API variants (`Auth`, `RateLimit`, `Validation`, `NotFound`, `Api`)
/// are produced only from non-200 responses and carry the HTTP status plus
/// the parsed response body. `Request` and `FileRead` are transport and
/// filesystem failures, including those hit while fetching content during
/// normalization. The client never retries; callers wanting backoff can
/// match on the variant (e.g. retry on `RateLimit`).
#[derive(Debug, Error)]
pub enum ClassifaiError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 401 — bad or missing credentials.
    #[error("authentication failed ({status_code}): {message}")]
    Auth {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// 429 — quota exceeded.
    #[error("rate limit exceeded ({status_code}): {message}")]
    RateLimit {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// 400 — the service rejected the request.
    #[error("validation failed ({status_code}): {message}")]
    Validation {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// 404 — unknown detection or project id.
    #[error("not found ({status_code}): {message}")]
    NotFound {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// Any other non-200 status, including 5xx.
    #[error("API error ({status_code}): {message}")]
    Api {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    #[error("failed to parse response: {0}")]
    ParseResponse(String),
}

impl ClassifaiError {
    /// HTTP status for API-mapped errors, `None` for local failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth { status_code, .. }
            | Self::RateLimit { status_code, .. }
            | Self::Validation { status_code, .. }
            | Self::NotFound { status_code, .. }
            | Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}
