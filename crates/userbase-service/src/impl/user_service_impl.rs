//! User service implementation.

use crate::dto::{CreateUserRequest, MISSING_FIELD_MESSAGE};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use userbase_core::{require_non_empty, NewUser, User, UserId, UserbaseError, UserbaseResult, ValidateExt};
use userbase_repository::UserRepository;

/// User service backed by a shared repository handle.
#[derive(Clone)]
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

/// Turns a validated request into an insertable record.
fn into_new_user(request: CreateUserRequest) -> UserbaseResult<NewUser> {
    match request {
        CreateUserRequest {
            name: Some(name),
            nickname: Some(nickname),
            age: Some(age),
            gender: Some(gender),
        } => Ok(NewUser::new(name, nickname, age, gender)),
        _ => Err(UserbaseError::validation(MISSING_FIELD_MESSAGE)),
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> UserbaseResult<Vec<User>> {
        debug!("Listing users");

        self.user_repository.find_all().await
    }

    async fn get_user(&self, id: UserId) -> UserbaseResult<User> {
        debug!("Getting user: {}", id);

        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserbaseError::database("record not found"))
    }

    async fn search_users(&self, keyword: &str) -> UserbaseResult<Vec<User>> {
        let keyword = require_non_empty(keyword, "search")?;
        debug!("Searching users by name: {}", keyword);

        self.user_repository.find_by_name_containing(keyword).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> UserbaseResult<User> {
        request.validate_or(MISSING_FIELD_MESSAGE)?;
        let new_user = into_new_user(request)?;
        debug!("Creating user: {}", new_user.name);

        let user = self.user_repository.insert(new_user).await?;

        info!("User created: {}", user.id);
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> UserbaseResult<()> {
        debug!("Deleting user: {}", id);

        let affected = self.user_repository.soft_delete(id).await?;
        if affected > 0 {
            info!("User deleted: {}", id);
        } else {
            debug!("No live user with id {}, nothing deleted", id);
        }
        Ok(())
    }
}
