//! Field acceptance rules for a registration record.
//!
//! Checks run in a fixed order and stop at the first failure, so a record with
//! several problems always reports the same one.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DOMAIN_EDGE_CHAR, DOMAIN_ILLEGAL_CHARS, EMAIL_SEPARATOR, NAME_ILLEGAL_CHARS,
    NAME_ILLEGAL_CHARS_EXTENDED,
};
use crate::error::ValidationError;
use crate::user::User;

/// The character sets the validator rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRules {
    /// Rejected in callsign, first and last name
    pub name_illegal: String,
    /// Rejected in the email domain
    pub domain_illegal: String,
}

impl Default for CharacterRules {
    fn default() -> Self {
        Self {
            name_illegal: NAME_ILLEGAL_CHARS.to_string(),
            domain_illegal: DOMAIN_ILLEGAL_CHARS.to_string(),
        }
    }
}

impl CharacterRules {
    /// Rules of the networked deployment (also rejects `±` and `§` in names).
    pub fn extended() -> Self {
        Self {
            name_illegal: NAME_ILLEGAL_CHARS_EXTENDED.to_string(),
            ..Self::default()
        }
    }
}

/// Validate every field of `user`, returning the first violation.
pub fn validate(user: &User, rules: &CharacterRules) -> Result<(), ValidationError> {
    if contains_any(&user.callsign, &rules.name_illegal) {
        return Err(ValidationError::IllegalCallsign);
    }

    let domain = email_domain(&user.registration_email).ok_or(ValidationError::InvalidEmail)?;

    if domain.starts_with(DOMAIN_EDGE_CHAR) || domain.ends_with(DOMAIN_EDGE_CHAR) {
        return Err(ValidationError::DomainEdgeHyphen);
    }

    if contains_any(domain, &rules.domain_illegal) {
        return Err(ValidationError::DomainIllegalCharacter);
    }

    if contains_any(&user.first, &rules.name_illegal) {
        return Err(ValidationError::IllegalFirstName);
    }
    if contains_any(&user.last, &rules.name_illegal) {
        return Err(ValidationError::IllegalLastName);
    }

    Ok(())
}

/// Domain part of an address with exactly one separator and two non-empty halves.
fn email_domain(email: &str) -> Option<&str> {
    let (local, domain) = email.split_once(EMAIL_SEPARATOR)?;
    if local.is_empty() || domain.is_empty() || domain.contains(EMAIL_SEPARATOR) {
        return None;
    }
    Some(domain)
}

fn contains_any(value: &str, set: &str) -> bool {
    value.chars().any(|c| set.contains(c))
}
