//! Registration Service Library
//!
//! Composes the domain components into the registration pipeline consumed by
//! a transport collaborator: raw fields in, account record or outcome out.
//! Transport, persistence and authentication live outside this crate.

pub mod config;
pub mod index;
pub mod outcome;
pub mod service;

use tracing::info;

pub use crate::config::RegistrationServiceConfig;
pub use crate::index::IdentifierIndex;
pub use crate::outcome::{RegistrationOutcome, METHOD_NOT_ALLOWED_BODY};
pub use crate::service::{Registrar, RegistrationService};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::index::MockIdentifierIndex;

/// Build a registrar from environment configuration.
pub fn registrar_from_env() -> Registrar {
    let config = RegistrationServiceConfig::from_env();
    info!(
        stages = ?config.registration.stages,
        hash_cost = config.registration.hash_cost,
        "Registration pipeline configured"
    );
    Registrar::new(config)
}
