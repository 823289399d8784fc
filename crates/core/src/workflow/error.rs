//! Workflow error types for engagement lifecycle management.

use thiserror::Error;

use crate::workflow::types::{EngagementRole, EngagementStatus};

/// Errors that can occur during workflow operations.
///
/// A rejected transition is a distinct permission failure, never a silent
/// no-op; callers layer their own transport or storage failures on top.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The role is not permitted to set the requested status.
    #[error("Role {role} is not permitted to set status {target}")]
    PermissionDenied {
        /// The acting role.
        role: EngagementRole,
        /// The requested target status.
        target: EngagementStatus,
    },

    /// The role is not permitted to create engagements.
    #[error("Role {role} is not permitted to create engagements")]
    CreationNotAllowed {
        /// The acting role.
        role: EngagementRole,
    },
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::PermissionDenied { .. } | Self::CreationNotAllowed { .. } => 403,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::CreationNotAllowed { .. } => "CREATION_NOT_ALLOWED",
        }
    }
}
