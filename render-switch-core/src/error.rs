//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use render_switch_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A selection token is neither an integer nor a `start-end` pair
    #[error("invalid index format '{token}'. Use numbers, ranges (e.g. 1-3) or 'all'")]
    InvalidIndexFormat { token: String },

    /// A selected index has no configured account
    #[error("one or more indices are invalid. Use numbers between 0 and {max}, ranges or 'all'")]
    IndexOutOfRange { max: usize },

    /// An index was selected but the account list is empty
    #[error("no accounts are configured")]
    NoAccountsConfigured,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidIndexFormat { .. }
            | Self::IndexOutOfRange { .. }
            | Self::NoAccountsConfigured => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
