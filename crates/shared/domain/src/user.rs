//! User domain entity and the raw registration record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DESCRIPTION, NO_USER_ID, SYSTEM_USER_ID};
use crate::password::CredentialHash;

/// Raw fields supplied by the transport layer for one registration attempt.
#[derive(Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    pub callsign: String,
    pub first: String,
    pub last: String,
    pub email: String,
    pub password: String,
    /// Whether a telephony extension should be derived
    #[serde(default, alias = "sip")]
    pub telephony_requested: bool,
}

// Don't expose the password in debug output
impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("callsign", &self.callsign)
            .field("first", &self.first)
            .field("last", &self.last)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("telephony_requested", &self.telephony_requested)
            .finish()
    }
}

/// User domain entity.
///
/// Built once per registration and enriched through the `with_*` methods,
/// each of which consumes the snapshot and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Random identifier; 0 until one is assigned
    pub id: u64,
    pub callsign: String,
    pub first: String,
    pub last: String,
    pub registration_email: String,
    #[serde(skip_serializing, default)]
    pub credential_hash: Vec<u8>,
    /// Telephony extension; 0 when none was requested
    pub extension_number: i64,
    pub description: String,
    pub approved_by: u64,
    pub blocked_by: u64,
    pub blocked: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub registration_date: DateTime<Utc>,
}

impl User {
    /// Create a candidate account, blocked by the system until approved
    pub fn new(callsign: String, first: String, last: String, registration_email: String) -> Self {
        Self {
            id: 0,
            callsign,
            first,
            last,
            registration_email,
            credential_hash: Vec::new(),
            extension_number: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
            approved_by: NO_USER_ID,
            blocked_by: SYSTEM_USER_ID,
            blocked: true,
            registration_date: Utc::now(),
        }
    }

    /// Attach a credential hash
    pub fn with_credential_hash(self, hash: CredentialHash) -> Self {
        Self {
            credential_hash: hash.into_bytes(),
            ..self
        }
    }

    /// Attach a telephony extension
    pub fn with_extension(self, extension_number: i64) -> Self {
        Self {
            extension_number,
            ..self
        }
    }

    /// Attach an identifier
    pub fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }

    /// Check if a credential hash has been attached
    pub fn has_credential(&self) -> bool {
        !self.credential_hash.is_empty()
    }

    /// Check if an identifier has been assigned
    pub fn has_id(&self) -> bool {
        self.id != 0
    }

    /// Registration time as Unix seconds
    pub fn registration_timestamp(&self) -> i64 {
        self.registration_date.timestamp()
    }
}

impl From<&RegistrationRequest> for User {
    fn from(request: &RegistrationRequest) -> Self {
        User::new(
            request.callsign.clone(),
            request.first.clone(),
            request.last.clone(),
            request.email.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            callsign: "M1MIK".to_string(),
            first: "Mike".to_string(),
            last: "Hotel".to_string(),
            email: "time123hotel@example.com".to_string(),
            password: "longenoughpassword".to_string(),
            telephony_requested: true,
        }
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::from(&request());

        assert_eq!(user.id, 0);
        assert!(user.blocked);
        assert_eq!(user.blocked_by, SYSTEM_USER_ID);
        assert_eq!(user.approved_by, NO_USER_ID);
        assert_eq!(user.description, "New User");
        assert_eq!(user.extension_number, 0);
        assert!(!user.has_credential());
        assert_eq!(user.registration_email, "time123hotel@example.com");
    }

    #[test]
    fn test_with_methods_keep_other_fields() {
        let user = User::from(&request());
        let registered_at = user.registration_date;

        let user = user.with_extension(209).with_id(42);

        assert_eq!(user.extension_number, 209);
        assert_eq!(user.id, 42);
        assert!(user.has_id());
        assert_eq!(user.callsign, "M1MIK");
        assert_eq!(user.registration_date, registered_at);
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let output = format!("{:?}", request());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("longenoughpassword"));
    }

    #[test]
    fn test_serialization_skips_credential_hash() {
        let user = User::from(&request())
            .with_credential_hash(CredentialHash::from_string("$argon2id$fake".to_string()));

        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("credential_hash").is_none());
        assert_eq!(json["registration_date"], user.registration_timestamp());
        assert_eq!(json["blocked"], true);
    }

    #[test]
    fn test_request_telephony_defaults_to_false() {
        let request: RegistrationRequest = serde_json::from_str(
            r#"{"callsign":"A","first":"B","last":"C","email":"d@e","password":"p"}"#,
        )
        .unwrap();
        assert!(!request.telephony_requested);
    }

    #[test]
    fn test_request_accepts_sip_field() {
        let request: RegistrationRequest = serde_json::from_str(
            r#"{"callsign":"M1MIK","first":"Mike","last":"Hotel",
                "email":"a@b.c","password":"longenoughpassword","sip":true}"#,
        )
        .unwrap();
        assert!(request.telephony_requested);
    }
}
