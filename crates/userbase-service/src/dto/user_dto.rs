//! User-related DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

/// Message returned when a create payload is incomplete.
pub const MISSING_FIELD_MESSAGE: &str = "Required field missing in request";

/// Request to create a new user.
///
/// Every field is optional on the wire so that an incomplete body still
/// parses; completeness is checked afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(required)]
    pub name: Option<String>,

    #[validate(required)]
    pub nickname: Option<String>,

    #[validate(required)]
    pub age: Option<i64>,

    /// `false` for male, `true` for female.
    #[validate(required)]
    pub gender: Option<bool>,
}

impl CreateUserRequest {
    /// Parses a request body without ever failing.
    ///
    /// Keys match regardless of case and unknown fields are ignored. A body
    /// that is not a JSON object of this shape yields an all-empty request,
    /// which then fails validation.
    #[must_use]
    pub fn from_lenient_json(body: &[u8]) -> Self {
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => Value::Object(fold_keys(object)),
            Ok(other) => {
                debug!("Ignoring non-object create body: {}", other);
                return Self::default();
            }
            Err(e) => {
                debug!("Ignoring unparseable create body: {}", e);
                return Self::default();
            }
        };

        serde_json::from_value(value).unwrap_or_else(|e| {
            debug!("Ignoring malformed create body: {}", e);
            Self::default()
        })
    }
}

/// Lowercases object keys. A key that is already lowercase wins over its
/// differently-cased spellings.
fn fold_keys(object: Map<String, Value>) -> Map<String, Value> {
    let (exact, folded): (Vec<_>, Vec<_>) = object
        .into_iter()
        .partition(|(key, _)| key.to_lowercase() == *key);

    let mut result = Map::new();
    for (key, value) in folded {
        result.insert(key.to_lowercase(), value);
    }
    result.extend(exact);
    result
}

/// Body returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Success")]
    pub status: String,
}

impl StatusResponse {
    /// The only status ever reported.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: "Success".to_string(),
        }
    }
}
