//! Typed ID wrappers for domain entities.

use crate::{malformed_field, UserbaseResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user IDs.
///
/// Ids are assigned by the store from a monotonically increasing sequence
/// and are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parses a user ID from a path segment.
    ///
    /// Anything that is not a base-10 integer, or is negative, is rejected
    /// with a validation error.
    pub fn parse(s: &str) -> UserbaseResult<Self> {
        match s.parse::<i64>() {
            Ok(id) if id >= 0 => Ok(Self(id)),
            _ => Err(malformed_field("id")),
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(UserId::parse("0").unwrap(), UserId(0));
        assert_eq!(UserId::parse("42").unwrap(), UserId(42));
        assert_eq!(UserId::parse("+7").unwrap(), UserId(7));
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = UserId::parse("-1").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Field 'id' isn't properly formed");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "abc", "1.5", "12abc", " 3", "99999999999999999999"] {
            assert!(UserId::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&UserId(5)).unwrap(), "5");
        let id: UserId = serde_json::from_str("9").unwrap();
        assert_eq!(id, UserId(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId(12).to_string(), "12");
    }
}
