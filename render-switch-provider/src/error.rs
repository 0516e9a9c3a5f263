use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::log_sanitizer::truncate_for_log;

/// Unified error type for all control-plane operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// A credential rejected by the remote side is not a distinct variant: it surfaces as
/// [`HttpStatus`](Self::HttpStatus) carrying the 401/403 status and the response body.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The remote API answered with a status outside the accepted set.
    #[error("[{provider}] HTTP {status}: {body}")]
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body (possibly empty).
        body: String,
    },

    /// Failed to parse the provider's API response.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The HTTP client could not be constructed (bad TLS backend, invalid base URL, ...).
    #[error("[{provider}] Client initialization failed: {detail}")]
    ClientInit {
        /// Provider that produced the error.
        provider: String,
        /// Details about the failure.
        detail: String,
    },
}

impl ProviderError {
    /// HTTP status carried by the error, if the remote side answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short operator-facing form: the bare status code when there is one,
    /// otherwise the full message.
    #[must_use]
    pub fn summary(&self) -> String {
        self.status()
            .map_or_else(|| self.to_string(), |status| status.to_string())
    }

    /// Display form with any response body cut down to a readable length.
    ///
    /// Suitable for operator replies, where a raw 5xx HTML page would be noise.
    #[must_use]
    pub fn brief(&self) -> String {
        match self {
            Self::HttpStatus {
                provider,
                status,
                body,
            } => format!("[{provider}] HTTP {status}: {}", truncate_for_log(body)),
            _ => self.to_string(),
        }
    }

    /// 是否为预期行为（凭证失效、服务不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "render".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[render] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            provider: "render".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[render] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_http_status() {
        let e = ProviderError::HttpStatus {
            provider: "render".to_string(),
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(e.to_string(), "[render] HTTP 401: unauthorized");
    }

    #[test]
    fn summary_prefers_status_code() {
        let e = ProviderError::HttpStatus {
            provider: "render".to_string(),
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(e.summary(), "404");
        assert_eq!(e.status(), Some(404));
    }

    #[test]
    fn summary_falls_back_to_message() {
        let e = ProviderError::NetworkError {
            provider: "render".to_string(),
            detail: "reset".to_string(),
        };
        assert_eq!(e.summary(), "[render] Network error: reset");
        assert_eq!(e.status(), None);
    }

    #[test]
    fn client_errors_are_expected() {
        let auth = ProviderError::HttpStatus {
            provider: "render".into(),
            status: 401,
            body: String::new(),
        };
        let server = ProviderError::HttpStatus {
            provider: "render".into(),
            status: 503,
            body: String::new(),
        };
        let timeout = ProviderError::Timeout {
            provider: "render".into(),
            detail: "x".into(),
        };
        assert!(auth.is_expected());
        assert!(!server.is_expected());
        assert!(!timeout.is_expected());
    }

    #[test]
    fn serialize_tags_variant() {
        let e = ProviderError::HttpStatus {
            provider: "render".to_string(),
            status: 429,
            body: "slow down".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HttpStatus\""));
        assert!(json.contains("\"status\":429"));
    }

    #[test]
    fn brief_truncates_long_bodies() {
        let page = "<html>".repeat(200);
        let e = ProviderError::HttpStatus {
            provider: "render".to_string(),
            status: 502,
            body: page.clone(),
        };
        let brief = e.brief();
        assert!(brief.starts_with("[render] HTTP 502: <html>"));
        assert!(brief.contains("[truncated, total 1200 bytes]"));
        assert!(brief.len() < page.len());

        let short = ProviderError::HttpStatus {
            provider: "render".to_string(),
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(short.brief(), short.to_string());
    }
}
