//! User service trait definition.

use crate::dto::CreateUserRequest;
use async_trait::async_trait;
use userbase_core::{User, UserId, UserbaseResult};

/// User service trait.
///
/// Each operation issues at most one call to the store and propagates its
/// errors unchanged.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists every live user.
    async fn list_users(&self) -> UserbaseResult<Vec<User>>;

    /// Gets a live user by ID. A missing user is a store error.
    async fn get_user(&self, id: UserId) -> UserbaseResult<User>;

    /// Finds live users whose name contains `keyword`. An empty keyword is
    /// rejected before the store is queried.
    async fn search_users(&self, keyword: &str) -> UserbaseResult<Vec<User>>;

    /// Creates a user once all four attributes are present.
    async fn create_user(&self, request: CreateUserRequest) -> UserbaseResult<User>;

    /// Soft-deletes a user. Unknown and already-deleted ids succeed.
    async fn delete_user(&self, id: UserId) -> UserbaseResult<()>;
}
