//! Domain layer - Registration entities and the rules that accept them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every component here is a stateless function over a single record; the
//! registration service composes them into a pipeline.

pub mod constants;
pub mod error;
pub mod extension;
pub mod identifier;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{CredentialError, DomainError, ValidationError};
pub use extension::generate_extension;
pub use identifier::IdentifierGenerator;
pub use password::{CredentialHash, CredentialManager};
pub use user::{RegistrationRequest, User};
pub use validation::{validate, CharacterRules};
