//! Client session status machine.
//!
//! ```text
//! in_progress --complete--> completed
//! in_progress --abandon---> abandoned
//! ```
//!
//! Both terminal states are final. Repeating the transition that led to
//! the current state is a no-op.

use crate::error::CoreError;

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ABANDONED: &str = "abandoned";

/// Lifecycle state of a client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl SessionStatus {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_ABANDONED => Ok(Self::Abandoned),
            other => Err(CoreError::Internal(format!(
                "Unknown session status '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
            Self::Abandoned => STATUS_ABANDONED,
        }
    }

    /// French label used in the client report.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "En cours",
            Self::Completed => "Terminée",
            Self::Abandoned => "Abandonnée",
        }
    }
}

/// Outcome of applying a transition to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The row must be updated to the target status.
    Apply,
    /// The session is already in the target status; nothing to write.
    AlreadyThere,
}

/// Check whether `from` may move to `to`.
pub fn check_transition(from: SessionStatus, to: SessionStatus) -> Result<Transition, CoreError> {
    if from == to {
        return Ok(Transition::AlreadyThere);
    }
    match (from, to) {
        (SessionStatus::InProgress, SessionStatus::Completed)
        | (SessionStatus::InProgress, SessionStatus::Abandoned) => Ok(Transition::Apply),
        _ => Err(CoreError::Conflict(format!(
            "Session is {} and cannot become {}",
            from.as_str(),
            to.as_str()
        ))),
    }
}
