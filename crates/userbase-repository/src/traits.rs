//! Repository trait definitions.

use async_trait::async_trait;
use userbase_core::{NewUser, User, UserId, UserbaseResult};

/// User repository trait.
///
/// Soft-deleted rows are invisible to every read. Each method maps to a
/// single statement against the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every live user.
    async fn find_all(&self) -> UserbaseResult<Vec<User>>;

    /// Finds a live user by ID.
    async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>>;

    /// Returns live users whose name contains `keyword`, using the store's
    /// `LIKE` semantics.
    async fn find_by_name_containing(&self, keyword: &str) -> UserbaseResult<Vec<User>>;

    /// Inserts a user and returns the stored record with its new id.
    async fn insert(&self, user: NewUser) -> UserbaseResult<User>;

    /// Marks a live user as deleted. Returns the number of rows touched,
    /// which is zero for unknown or already-deleted ids.
    async fn soft_delete(&self, id: UserId) -> UserbaseResult<u64>;
}
