//! Domain-level errors.
//!
//! These errors represent rejected registration input and credential failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// A field failed one of the ordered acceptance checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("callsign contains illegal characters")]
    IllegalCallsign,

    #[error("email is not valid")]
    InvalidEmail,

    #[error("email domain (-) at start or end")]
    DomainEdgeHyphen,

    #[error("email domain contains illegal characters")]
    DomainIllegalCharacter,

    #[error("first name contains illegal characters")]
    IllegalFirstName,

    #[error("last name contains illegal characters")]
    IllegalLastName,
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::IllegalCallsign => "ILLEGAL_CALLSIGN",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::DomainEdgeHyphen => "DOMAIN_EDGE_HYPHEN",
            ValidationError::DomainIllegalCharacter => "DOMAIN_ILLEGAL_CHARACTER",
            ValidationError::IllegalFirstName => "ILLEGAL_FIRST_NAME",
            ValidationError::IllegalLastName => "ILLEGAL_LAST_NAME",
        }
    }
}

/// Password hashing and verification failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password is too short")]
    PasswordTooShort,

    /// The hasher itself failed (bad parameters, RNG failure)
    #[error("password hash failed: {0}")]
    HashFailure(String),

    /// Wrong password or unreadable stored hash; deliberately indistinguishable
    #[error("credential verification failed")]
    VerificationFailed,
}

impl CredentialError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CredentialError::PasswordTooShort => "PASSWORD_TOO_SHORT",
            CredentialError::HashFailure(_) => "HASH_FAILURE",
            CredentialError::VerificationFailed => "VERIFICATION_FAILED",
        }
    }
}

/// Domain-specific errors for registration rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Password-related errors
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Every drawn identifier was already taken
    #[error("could not allocate a unique identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },
}

impl DomainError {
    /// Get error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(e) => e.code(),
            DomainError::Credential(e) => e.code(),
            DomainError::IdentifierExhausted { .. } => "IDENTIFIER_EXHAUSTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_verbatim() {
        assert_eq!(
            ValidationError::IllegalCallsign.to_string(),
            "callsign contains illegal characters"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "email is not valid");
    }

    #[test]
    fn test_domain_error_is_transparent_over_causes() {
        let err = DomainError::from(CredentialError::PasswordTooShort);
        assert_eq!(err.to_string(), "password is too short");
        assert_eq!(err.code(), "PASSWORD_TOO_SHORT");

        let err = DomainError::from(ValidationError::DomainEdgeHyphen);
        assert_eq!(err.code(), "DOMAIN_EDGE_HYPHEN");
    }

    #[test]
    fn test_identifier_exhausted_message() {
        let err = DomainError::IdentifierExhausted { attempts: 8 };
        assert_eq!(
            err.to_string(),
            "could not allocate a unique identifier after 8 attempts"
        );
    }
}
