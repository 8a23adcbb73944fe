//! Result of one registration attempt as seen by the transport layer.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use common::AppError;

/// Plain-text body for any method other than POST.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Sorry, that method is not supported";

/// Outcome handed back to the transport collaborator.
///
/// Displays as the plain-text response body and serializes as
/// `{"ok": true, "callsign": ..}` or `{"ok": false, "code": .., "message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success { callsign: String },
    Failure { code: String, message: String },
}

impl RegistrationOutcome {
    pub fn success(callsign: impl Into<String>) -> Self {
        RegistrationOutcome::Success {
            callsign: callsign.into(),
        }
    }

    /// Failure carrying the error's code and its caller-safe message
    pub fn failure(err: &AppError) -> Self {
        RegistrationOutcome::Failure {
            code: err.code().to_string(),
            message: err.user_message(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, RegistrationOutcome::Success { .. })
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Success { callsign } => {
                write!(f, "RESULT: OK, Callsign: {}", callsign)
            }
            RegistrationOutcome::Failure { message, .. } => write!(f, "ERROR: {}", message),
        }
    }
}

impl Serialize for RegistrationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RegistrationOutcome::Success { callsign } => {
                let mut state = serializer.serialize_struct("RegistrationOutcome", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("callsign", callsign)?;
                state.end()
            }
            RegistrationOutcome::Failure { code, message } => {
                let mut state = serializer.serialize_struct("RegistrationOutcome", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("code", code)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}
