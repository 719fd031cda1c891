/// Errors that can occur while coordinating approvals.
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    /// The permission service could not be reached.
    #[error("confirmation transport error: {0}")]
    Transport(String),

    /// The permission service answered with an application-level error.
    #[error("permission service error: {0}")]
    Service(String),

    /// Storage backend error (lock poisoned, etc.).
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for approval operations.
pub type ApprovalResult<T> = Result<T, ApprovalError>;
