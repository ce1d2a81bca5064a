//! Engine error types
//!
//! Plan validation and session precondition failures are typed so hosts can
//! show them as one-line messages and tell them apart from storage errors,
//! which stay `anyhow` at the app boundary.

use thiserror::Error;
use tracing::warn;

/// Rejected questionnaire answers. Raised at generation entry, before any
/// selection work happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid answers: {message}")]
    Validation { message: String },
}

impl PlanError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "repforge::plan", %message, "rejected questionnaire answers");
        PlanError::Validation { message }
    }
}

/// Failures of the live session runtime. None of these corrupt session
/// state; the session stays usable after every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no exercise with id {0} in this session")]
    UnknownExercise(u32),

    #[error("set {index} is out of range (exercise has {sets} sets)")]
    SetOutOfRange { index: usize, sets: u32 },

    #[error("an exercise needs at least one set")]
    InvalidSetCount,

    #[error("set tracking is frozen while edit mode is on")]
    EditModeActive,

    #[error("structural edits require edit mode")]
    EditModeOff,

    #[error("cannot finish: no set has been completed yet")]
    NothingCompleted,
}
