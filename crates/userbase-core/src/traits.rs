//! Core traits shared across layers.

use crate::UserbaseResult;
use async_trait::async_trait;

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}

/// A dependency that can report whether it is currently usable.
///
/// The readiness endpoint calls this on every request, so implementations should
/// do the cheapest round trip available.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `Ok(())` if the dependency answered.
    async fn check(&self) -> UserbaseResult<()>;
}
