//! Registration service - Turns raw registration fields into an account record.
//!
//! SOLID (SRP): Orchestrates the pipeline only; every rule lives in the domain crate.
//! Hashing is CPU-bound and always runs on the blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::RegistrationServiceConfig;
use crate::index::IdentifierIndex;
use crate::outcome::RegistrationOutcome;
use common::{AppError, AppResult};
use domain::{
    generate_extension, validate, CredentialHash, CredentialManager, DomainError,
    IdentifierGenerator, RegistrationRequest, User,
};

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run the pipeline and return the accepted account
    async fn register(&self, request: RegistrationRequest) -> AppResult<User>;

    /// Verify a password against a stored credential hash
    async fn verify_credential(&self, hash: CredentialHash, password: String) -> AppResult<()>;

    /// Register and fold the result into the transport-facing outcome
    async fn submit(&self, request: RegistrationRequest) -> RegistrationOutcome {
        match self.register(request).await {
            Ok(user) => RegistrationOutcome::success(user.callsign),
            Err(err) => RegistrationOutcome::failure(&err),
        }
    }
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    config: RegistrationServiceConfig,
    credentials: CredentialManager,
    identifiers: IdentifierGenerator,
    index: Option<Arc<dyn IdentifierIndex>>,
}

impl Registrar {
    /// Create a registrar without a collision index
    pub fn new(config: RegistrationServiceConfig) -> Self {
        Self {
            credentials: CredentialManager::new(config.registration.hash_cost),
            identifiers: IdentifierGenerator::new(),
            index: None,
            config,
        }
    }

    /// Check drawn identifiers against an index before assigning them
    pub fn with_index(mut self, index: Arc<dyn IdentifierIndex>) -> Self {
        self.index = Some(index);
        self
    }

    async fn run_pipeline(&self, request: RegistrationRequest) -> AppResult<User> {
        let stages = self.config.registration.stages;
        let user = User::from(&request);

        // A short password outranks every field error
        if stages.credentials {
            CredentialManager::check_length(&request.password)?;
        }

        validate(&user, &self.config.registration.rules)?;

        let user = if stages.credentials {
            let hash = self.hash_password(request.password).await?;
            user.with_credential_hash(hash)
        } else {
            user
        };

        let user = if stages.telephony && request.telephony_requested {
            let extension = generate_extension(&user.callsign);
            user.with_extension(extension)
        } else {
            user
        };

        let user = if stages.identifiers {
            let id = self.allocate_id().await?;
            user.with_id(id)
        } else {
            user
        };

        Ok(user)
    }

    async fn hash_password(&self, password: String) -> AppResult<CredentialHash> {
        let credentials = self.credentials;
        let hash = tokio::task::spawn_blocking(move || credentials.hash(&password))
            .await
            .map_err(|e| AppError::blocking_task(e.to_string()))??;
        Ok(hash)
    }

    async fn allocate_id(&self) -> AppResult<u64> {
        let attempts = self.config.max_identifier_attempts.max(1);

        for attempt in 1..=attempts {
            let id = self.identifiers.generate();
            let Some(index) = &self.index else {
                return Ok(id);
            };
            if !index.contains(id).await? {
                return Ok(id);
            }
            debug!(attempt, "Identifier already taken, drawing again");
        }

        Err(DomainError::IdentifierExhausted { attempts }.into())
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, request: RegistrationRequest) -> AppResult<User> {
        let callsign = request.callsign.clone();
        debug!(
            callsign = %callsign,
            telephony = request.telephony_requested,
            "Registration attempt"
        );

        match self.run_pipeline(request).await {
            Ok(user) => {
                info!(
                    callsign = %user.callsign,
                    id = user.id,
                    extension = user.extension_number,
                    "Registration accepted"
                );
                Ok(user)
            }
            Err(err) => {
                warn!(callsign = %callsign, code = err.code(), "Registration rejected: {}", err);
                Err(err)
            }
        }
    }

    async fn verify_credential(&self, hash: CredentialHash, password: String) -> AppResult<()> {
        let credentials = self.credentials;
        tokio::task::spawn_blocking(move || credentials.verify(&hash, &password))
            .await
            .map_err(|e| AppError::blocking_task(e.to_string()))??;
        Ok(())
    }
}
