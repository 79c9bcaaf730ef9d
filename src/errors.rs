use std::fmt;

use crate::engine::status::WorkflowStatus;

/// All engine failures are values; none of them aborts the caller.
/// An `Err` from any operation means the instance was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Requested target is not in the transition table for the current status.
    IllegalTransition { from: WorkflowStatus, to: WorkflowStatus },
    /// `reject_to` called with a target that is not a rejection state
    /// reachable from the current status.
    InvalidRejectionTarget { from: WorkflowStatus, target: WorkflowStatus },
    /// `correct_after_rejection` called from a state with no correction path.
    NoCorrectionAvailable(WorkflowStatus),
    /// A chain status code that does not exist in the definition.
    UnknownStatus(String),
    /// A chain edge that does not exist between two known statuses.
    IllegalChainTransition { scope: String, from: String, to: String },
    /// A chain edge exists but the caller lacks its required permission code.
    PermissionDenied(String),
    /// Store lookup miss.
    NotFound(String),
}

impl WorkflowError {
    /// Target the refused operation was aiming at, when one was named.
    pub fn requested_target(&self) -> Option<WorkflowStatus> {
        match self {
            WorkflowError::IllegalTransition { to, .. } => Some(*to),
            WorkflowError::InvalidRejectionTarget { target, .. } => Some(*target),
            _ => None,
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::IllegalTransition { from, to } => {
                write!(f, "Illegal transition: {} -> {}", from.as_code(), to.as_code())
            }
            WorkflowError::InvalidRejectionTarget { from, target } => {
                write!(f, "Invalid rejection target: {} -> {}", from.as_code(), target.as_code())
            }
            WorkflowError::NoCorrectionAvailable(status) => {
                write!(f, "No correction available from {}", status.as_code())
            }
            WorkflowError::UnknownStatus(code) => write!(f, "Unknown status code: {code}"),
            WorkflowError::IllegalChainTransition { scope, from, to } => {
                write!(f, "Invalid transition: {from} -> {to} for {scope}")
            }
            WorkflowError::PermissionDenied(code) => write!(f, "Permission denied: {code}"),
            WorkflowError::NotFound(id) => write!(f, "Instance not found: {id}"),
        }
    }
}

impl std::error::Error for WorkflowError {}
