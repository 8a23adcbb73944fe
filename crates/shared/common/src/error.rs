//! Unified error handling for the registration services.
//!
//! Wraps domain failures together with runtime failures (blocking pool,
//! configuration) and decides what is safe to show the caller.

use domain::{CredentialError, DomainError};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected input or credential failure from the domain layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A blocking task panicked or was cancelled
    #[error("Blocking task failed: {0}")]
    BlockingTask(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Serializable error body for collaborators that report errors as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::BlockingTask(_) => "BLOCKING_TASK_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Domain(DomainError::Validation(_))
                | AppError::Domain(DomainError::Credential(
                    CredentialError::PasswordTooShort | CredentialError::VerificationFailed
                ))
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Domain(DomainError::Validation(e)) => e.to_string(),
            AppError::Domain(DomainError::Credential(
                e @ (CredentialError::PasswordTooShort | CredentialError::VerificationFailed),
            )) => e.to_string(),

            // Hide details for internal errors
            AppError::Domain(DomainError::Credential(e)) => {
                tracing::error!("Credential error: {}", e);
                "password could not be processed".to_string()
            }
            AppError::Domain(DomainError::IdentifierExhausted { attempts }) => {
                tracing::error!("Identifier allocation failed after {} attempts", attempts);
                "could not allocate a unique identifier".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::BlockingTask(msg) => {
                tracing::error!("Blocking task error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Code and user-facing message as a serializable body
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.user_message(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn blocking_task(msg: impl Into<String>) -> Self {
        AppError::BlockingTask(msg.into())
    }
}

impl From<domain::ValidationError> for AppError {
    fn from(err: domain::ValidationError) -> Self {
        AppError::Domain(err.into())
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        AppError::Domain(err.into())
    }
}
