//! Registration pipeline business logic.

mod registrar;

pub use registrar::{Registrar, RegistrationService};
