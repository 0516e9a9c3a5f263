//! Public types shared by the provider trait and its implementations.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Render REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.render.com/v1";

// ============ Service ============

/// Suspension state reported by the control plane for one service.
///
/// Unrecognized strings are kept verbatim in [`SuspendState::Unknown`] so callers can
/// decide explicitly what to do with them instead of falling through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuspendState {
    /// `"suspended"`
    Suspended,
    /// `"not_suspended"`
    NotSuspended,
    /// Anything else.
    Unknown(String),
}

impl SuspendState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Suspended => "suspended",
            Self::NotSuspended => "not_suspended",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for SuspendState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "suspended" => Self::Suspended,
            "not_suspended" => Self::NotSuspended,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<&str> for SuspendState {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SuspendState> for String {
    fn from(state: SuspendState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for SuspendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remote service as listed by the control plane.
///
/// Every field is optional: the snapshot is passed through as received and it is up to
/// the caller to skip incomplete records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub suspended: Option<SuspendState>,
}

impl ServiceRecord {
    /// Convenience constructor for fully populated records.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        suspended: impl Into<SuspendState>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            suspended: Some(suspended.into()),
        }
    }
}

// ============ Deploy ============

/// Result of asking the control plane for a fresh deploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RedeployOutcome {
    /// HTTP 201: a build is already running.
    BuildStarted,
    /// Another accepted 2xx (200/202).
    Accepted { status: u16 },
    /// Any other status.
    Rejected { status: u16, body: String },
}

// ============ Credentials / options ============

/// Credentials for one account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderCredentials {
    Render { api_key: String },
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { .. } => f
                .debug_struct("Render")
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Connection settings shared by every client the factory builds.
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    /// API base URL without trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Send `clearCache: "clear"` with deploy requests.
    pub clear_cache_on_deploy: bool,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            clear_cache_on_deploy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspend_state_from_known_strings() {
        assert_eq!(SuspendState::from("suspended"), SuspendState::Suspended);
        assert_eq!(SuspendState::from("not_suspended"), SuspendState::NotSuspended);
    }

    #[test]
    fn suspend_state_keeps_unknown_value() {
        let state = SuspendState::from("suspending");
        assert_eq!(state, SuspendState::Unknown("suspending".to_string()));
        assert_eq!(state.to_string(), "suspending");
    }

    #[test]
    fn service_record_deserializes_partial_payload() {
        let record: ServiceRecord =
            serde_json::from_str(r#"{"id":"srv-1","suspended":"not_suspended"}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("srv-1"));
        assert_eq!(record.name, None);
        assert_eq!(record.suspended, Some(SuspendState::NotSuspended));
    }

    #[test]
    fn credentials_debug_hides_key() {
        let creds = ProviderCredentials::Render {
            api_key: "rnd_secret".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("rnd_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
