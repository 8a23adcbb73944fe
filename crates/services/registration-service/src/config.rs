//! Registration service configuration.

use std::env;

use common::RegistrationConfig;
use domain::MAX_IDENTIFIER_ATTEMPTS;

/// Registration service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationServiceConfig {
    /// Pipeline stages, hash cost and character rules
    pub registration: RegistrationConfig,
    /// Identifiers drawn before giving up on collisions (at least one)
    pub max_identifier_attempts: u32,
}

impl RegistrationServiceConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_identifier_attempts: lookup("REGISTRATION_MAX_IDENTIFIER_ATTEMPTS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|attempts| *attempts > 0)
                .unwrap_or(MAX_IDENTIFIER_ATTEMPTS),
            registration: RegistrationConfig::from_lookup(lookup),
        }
    }
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self {
            registration: RegistrationConfig::default(),
            max_identifier_attempts: MAX_IDENTIFIER_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults() {
        let config = RegistrationServiceConfig::from_lookup(|_| None);
        assert_eq!(config, RegistrationServiceConfig::default());
        assert_eq!(config.max_identifier_attempts, 8);
    }

    #[test]
    fn test_zero_attempts_is_ignored() {
        let config = RegistrationServiceConfig::from_lookup(|key| {
            (key == "REGISTRATION_MAX_IDENTIFIER_ATTEMPTS").then(|| "0".to_string())
        });
        assert_eq!(config.max_identifier_attempts, 8);
    }

    #[test]
    fn test_lookup_reaches_pipeline_config() {
        let config = RegistrationServiceConfig::from_lookup(|key| match key {
            "REGISTRATION_MAX_IDENTIFIER_ATTEMPTS" => Some("3".to_string()),
            "REGISTRATION_TELEPHONY_ENABLED" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(config.max_identifier_attempts, 3);
        assert!(!config.registration.stages.telephony);
    }
}
