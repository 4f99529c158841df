//! User entity.

use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Every attribute is nullable; only the create path insists that all four
/// are present. The metadata keys keep their capitalised wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier.
    #[serde(rename = "ID")]
    pub id: UserId,

    /// Creation timestamp.
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker. Rows with a value here are invisible to reads.
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,

    pub name: Option<String>,

    pub nickname: Option<String>,

    pub age: Option<i64>,

    /// `false` for male, `true` for female.
    pub gender: Option<bool>,
}

impl User {
    /// Returns true when all four attributes are set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.name.is_some() && self.nickname.is_some() && self.age.is_some() && self.gender.is_some()
    }

    /// Returns true if the record has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true if the name contains `keyword` anywhere.
    #[must_use]
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.as_deref().is_some_and(|name| name.contains(keyword))
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

/// A fully populated user about to be inserted.
///
/// The store assigns the id; both timestamps are taken from `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub nickname: String,
    pub age: i64,
    pub gender: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Creates a new user stamped with the current time.
    #[must_use]
    pub fn new(name: String, nickname: String, age: i64, gender: bool) -> Self {
        Self {
            name,
            nickname,
            age,
            gender,
            created_at: Utc::now(),
        }
    }

    /// Materialises the stored record once the store has picked an id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: None,
            name: Some(self.name),
            nickname: Some(self.nickname),
            age: Some(self.age),
            gender: Some(self.gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        NewUser {
            name: "Alice".to_string(),
            nickname: "Al".to_string(),
            age: 30,
            gender: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
        .into_user(UserId(1))
    }

    #[test]
    fn test_into_user_copies_fields() {
        let user = sample_user();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.nickname.as_deref(), Some("Al"));
        assert_eq!(user.age, Some(30));
        assert_eq!(user.gender, Some(false));
        assert_eq!(user.created_at, user.updated_at);
        assert!(!user.is_deleted());
        assert!(user.is_complete());
    }

    #[test]
    fn test_incomplete_user() {
        let mut user = sample_user();
        user.age = None;
        assert!(!user.is_complete());
    }

    #[test]
    fn test_name_contains() {
        let mut user = sample_user();
        assert!(user.name_contains("lic"));
        assert!(user.name_contains("Alice"));
        assert!(!user.name_contains("alice"));

        user.name = None;
        assert!(!user.name_contains("A"));
    }

    #[test]
    fn test_json_shape() {
        let user = sample_user();
        let value = serde_json::to_value(&user).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["CreatedAt", "DeletedAt", "ID", "UpdatedAt", "age", "gender", "name", "nickname"]
        );
        assert_eq!(value["ID"], 1);
        assert!(value["DeletedAt"].is_null());
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["gender"], false);
        assert_eq!(value["CreatedAt"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_json_nulls_round_trip() {
        let raw = r#"{"ID":3,"CreatedAt":"2024-01-02T03:04:05Z","UpdatedAt":"2024-01-02T03:04:05Z","DeletedAt":null,"name":null,"nickname":null,"age":null,"gender":null}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, UserId(3));
        assert!(!user.is_complete());
    }
}
