//! PostgreSQL user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use userbase_core::{NewUser, User, UserId, UserbaseResult};

const SELECT_USERS: &str = r#"
    SELECT id, created_at, updated_at, deleted_at, name, nickname, age, gender
    FROM users
"#;

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    name: Option<String>,
    nickname: Option<String>,
    age: Option<i64>,
    gender: Option<bool>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            name: row.name,
            nickname: row.nickname,
            age: row.age,
            gender: row.gender,
        }
    }
}

/// Wraps a keyword in `%` wildcards. Wildcards inside the keyword are kept.
fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", keyword)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserbaseResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USERS} WHERE deleted_at IS NULL ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USERS} WHERE id = $1 AND deleted_at IS NULL ORDER BY id LIMIT 1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_name_containing(&self, keyword: &str) -> UserbaseResult<Vec<User>> {
        debug!("Finding users with name containing: {}", keyword);

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USERS} WHERE name LIKE $1 AND deleted_at IS NULL ORDER BY id"
        ))
        .bind(contains_pattern(keyword))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: NewUser) -> UserbaseResult<User> {
        debug!("Inserting user: {}", user.name);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (created_at, updated_at, name, nickname, age, gender)
            VALUES ($1, $1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user.created_at)
        .bind(&user.name)
        .bind(&user.nickname)
        .bind(user.age)
        .bind(user.gender)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(user.into_user(UserId::new(id)))
    }

    async fn soft_delete(&self, id: UserId) -> UserbaseResult<u64> {
        debug!("Soft-deleting user: {}", id);

        let result = sqlx::query(
            "UPDATE users SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("ali"), "%ali%");
        assert_eq!(contains_pattern("50%"), "%50%%");
    }

    #[test]
    fn test_row_conversion() {
        let now = Utc::now();
        let row = UserRow {
            id: 7,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            name: Some("Bob".to_string()),
            nickname: None,
            age: Some(41),
            gender: Some(false),
        };

        let user = User::from(row);
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert!(user.nickname.is_none());
        assert!(!user.is_complete());
    }
}
