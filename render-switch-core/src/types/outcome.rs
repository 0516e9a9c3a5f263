//! Per-operation result lines

use serde::Serialize;

/// Classification of one [`Outcome`], used for counting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Failure,
    /// Informational line, neither success nor failure (e.g. empty inventory)
    Notice,
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub account_index: usize,
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn success(account_index: usize, message: impl Into<String>) -> Self {
        Self::new(account_index, OutcomeKind::Success, message)
    }

    pub fn failure(account_index: usize, message: impl Into<String>) -> Self {
        Self::new(account_index, OutcomeKind::Failure, message)
    }

    pub fn notice(account_index: usize, message: impl Into<String>) -> Self {
        Self::new(account_index, OutcomeKind::Notice, message)
    }

    fn new(account_index: usize, kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            account_index,
            kind,
            message: message.into(),
        }
    }
}
