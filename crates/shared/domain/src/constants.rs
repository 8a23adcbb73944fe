//! Domain-level constants.
//!
//! These constants define the acceptance rules and defaults for new accounts.

// =============================================================================
// Character Rules
// =============================================================================

/// Characters rejected in callsigns and first/last names.
pub const NAME_ILLEGAL_CHARS: &str = "![];#$%&'*+/=?^_`{|}~-:<>,\\";

/// Name set used by the networked deployment, which additionally rejects `±` and `§`.
pub const NAME_ILLEGAL_CHARS_EXTENDED: &str = "![];#$%&'*+/=?^_`{|}~-±§:</>,\\";

/// Characters rejected in the domain part of a registration email.
///
/// Hyphens are allowed inside the domain; only edge hyphens are rejected.
pub const DOMAIN_ILLEGAL_CHARS: &str = "!#$%&'*+/=?^_`{|}~\\";

/// Separator between the local and domain parts of an email address
pub const EMAIL_SEPARATOR: char = '@';

/// Character that may not open or close an email domain
pub const DOMAIN_EDGE_CHAR: char = '-';

// =============================================================================
// Credentials
// =============================================================================

/// Minimum password length in bytes; anything of 8 bytes or fewer is rejected
pub const MIN_PASSWORD_LENGTH: usize = 9;

/// Argon2 time cost used for new credential hashes
pub const DEFAULT_HASH_COST: u32 = 12;

// =============================================================================
// Account Defaults
// =============================================================================

/// Description given to freshly registered accounts
pub const DEFAULT_DESCRIPTION: &str = "New User";

/// Identifier of the system account, which blocks new accounts pending approval
pub const SYSTEM_USER_ID: u64 = 1;

/// Placeholder for "no user" in approval/blocking references
pub const NO_USER_ID: u64 = 0;

// =============================================================================
// Identifiers
// =============================================================================

/// How many fresh identifiers to draw before giving up on a collision
pub const MAX_IDENTIFIER_ATTEMPTS: u32 = 8;
