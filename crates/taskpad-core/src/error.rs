use thiserror::Error;

use crate::task::TaskId;

/// Why a session action changed nothing.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ActionError {
    /// Validation and stale-reference failures; the UI drops these quietly.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::NotFound(_))
    }
}
