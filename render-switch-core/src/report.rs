//! Report formatting
//!
//! Pure functions only: the same outcomes always render to the same text.

use std::fmt;

use crate::error::CoreError;
use crate::types::{Action, Outcome, OutcomeKind};

/// Aggregated result of one orchestration run.
#[derive(Debug)]
pub enum Report {
    /// The run went through; `outcomes` are in production order.
    Completed {
        action: Action,
        outcomes: Vec<Outcome>,
    },
    /// The selection was rejected before any network call.
    Rejected(CoreError),
}

impl Report {
    /// Plain-text form returned to the operator.
    pub fn text(&self) -> String {
        match self {
            Self::Completed { action, outcomes } => format_outcomes(*action, outcomes),
            Self::Rejected(e) => format!("Error: {e}"),
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        match self {
            Self::Completed { outcomes, .. } => outcomes,
            Self::Rejected(_) => &[],
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.outcomes().iter().filter(|o| o.kind == kind).count()
    }

    pub fn success_count(&self) -> usize {
        self.count(OutcomeKind::Success)
    }

    pub fn failure_count(&self) -> usize {
        self.count(OutcomeKind::Failure)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Text shown when a run produced no outcome at all.
pub fn no_match_message(action: Action) -> String {
    format!("No service found for {action}.")
}

/// Join outcome messages with newlines, or return the no-match sentinel.
pub fn format_outcomes(action: Action, outcomes: &[Outcome]) -> String {
    if outcomes.is_empty() {
        return no_match_message(action);
    }
    outcomes
        .iter()
        .map(|o| o.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
