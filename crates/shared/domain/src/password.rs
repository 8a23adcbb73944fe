//! Credential hashing - one-way password storage and verification.
//!
//! Passwords are hashed with Argon2id at a fixed time cost and stored as PHC
//! strings, so verification reads the salt and cost back out of the stored
//! hash rather than from the current configuration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{DEFAULT_HASH_COST, MIN_PASSWORD_LENGTH};
use crate::error::CredentialError;

/// Opaque credential hash in PHC string form.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHash")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl CredentialHash {
    /// Wrap an existing PHC string (e.g. loaded by the persistence layer).
    pub fn from_string(hash: String) -> Self {
        Self { hash }
    }

    /// Wrap the bytes stored on a [`User`](crate::User).
    ///
    /// # Errors
    /// Returns `VerificationFailed` if the bytes are not UTF-8, since such a
    /// hash can never verify.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CredentialError> {
        let hash = std::str::from_utf8(bytes).map_err(|_| CredentialError::VerificationFailed)?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.hash.into_bytes()
    }
}

/// Hashes and verifies passwords.
///
/// Stateless apart from the work factor; both operations are CPU-bound and
/// should be run off any cooperative scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialManager {
    cost: u32,
}

impl Default for CredentialManager {
    fn default() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl CredentialManager {
    /// Create a manager hashing with the given Argon2 time cost.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plain text password.
    ///
    /// # Errors
    /// * `PasswordTooShort` if the password is 8 bytes or fewer
    /// * `HashFailure` if the hasher rejects its parameters
    pub fn hash(&self, password: &str) -> Result<CredentialHash, CredentialError> {
        Self::check_length(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::HashFailure(e.to_string()))?;

        Ok(CredentialHash {
            hash: hash.to_string(),
        })
    }

    /// Verify a plain text password against a stored hash.
    ///
    /// Malformed hashes and wrong passwords fail the same way.
    pub fn verify(&self, hash: &CredentialHash, password: &str) -> Result<(), CredentialError> {
        let parsed =
            PasswordHash::new(hash.as_str()).map_err(|_| CredentialError::VerificationFailed)?;

        // Parameters come from the parsed hash, not from self.cost
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| CredentialError::VerificationFailed)
    }

    /// Length check only, without paying for a hash.
    pub fn check_length(password: &str) -> Result<(), CredentialError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(CredentialError::PasswordTooShort);
        }
        Ok(())
    }

    fn argon2(&self) -> Result<Argon2<'static>, CredentialError> {
        let params = Params::new(Params::DEFAULT_M_COST, self.cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| CredentialError::HashFailure(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
