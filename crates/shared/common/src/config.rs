//! Shared configuration structures.

use domain::{CharacterRules, DEFAULT_HASH_COST};
use serde::{Deserialize, Serialize};

/// Optional stages of the registration pipeline.
///
/// Validation always runs; everything else is switched here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineStages {
    /// Hash the supplied password
    pub credentials: bool,
    /// Derive an extension when the caller asks for one
    pub telephony: bool,
    /// Assign a random identifier
    pub identifiers: bool,
}

impl Default for PipelineStages {
    fn default() -> Self {
        Self {
            credentials: true,
            telephony: true,
            identifiers: true,
        }
    }
}

impl PipelineStages {
    /// Networked deployment: credentials and telephony, ids left to storage.
    pub fn networked() -> Self {
        Self {
            credentials: true,
            telephony: true,
            identifiers: false,
        }
    }

    /// Offline deployment: identifiers only.
    pub fn offline() -> Self {
        Self {
            credentials: false,
            telephony: false,
            identifiers: true,
        }
    }
}

/// Registration pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationConfig {
    pub stages: PipelineStages,
    /// Argon2 time cost for new hashes
    pub hash_cost: u32,
    pub rules: CharacterRules,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            stages: PipelineStages::default(),
            hash_cost: DEFAULT_HASH_COST,
            rules: CharacterRules::default(),
        }
    }
}

impl RegistrationConfig {
    /// Build configuration from a key lookup (environment, map, ...).
    ///
    /// Missing or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| parse_flag(&v))
                .unwrap_or(default)
        };

        Self {
            stages: PipelineStages {
                credentials: flag("REGISTRATION_CREDENTIALS_ENABLED", defaults.stages.credentials),
                telephony: flag("REGISTRATION_TELEPHONY_ENABLED", defaults.stages.telephony),
                identifiers: flag("REGISTRATION_IDENTIFIERS_ENABLED", defaults.stages.identifiers),
            },
            hash_cost: lookup("REGISTRATION_HASH_COST")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.hash_cost),
            rules: CharacterRules {
                name_illegal: lookup("REGISTRATION_NAME_ILLEGAL_CHARS")
                    .unwrap_or(defaults.rules.name_illegal),
                domain_illegal: lookup("REGISTRATION_DOMAIN_ILLEGAL_CHARS")
                    .unwrap_or(defaults.rules.domain_illegal),
            },
        }
    }
}

/// Parse a boolean flag the way HTML form and environment values are written.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
