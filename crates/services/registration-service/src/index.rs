//! Collision checks against identifiers already handed out.

use async_trait::async_trait;

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lookup of identifiers already in use, owned by the persistence layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentifierIndex: Send + Sync {
    /// Check whether `id` is already assigned to an account
    async fn contains(&self, id: u64) -> AppResult<bool>;
}
