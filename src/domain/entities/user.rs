//! Authenticated user entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned user identifier.
///
/// Endpoints are free to use numeric or string identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(u64),
    Text(String),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Identity returned by the authentication endpoint after a successful login.
///
/// Only `id` and `name` are interpreted; every other field the server sends is
/// kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    id: UserId,
    name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Adds a server-defined field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a server-defined field that is not part of the core identity.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_id() {
        let user: AuthenticatedUser =
            serde_json::from_value(json!({"id": 1, "name": "bob"})).unwrap();

        assert_eq!(user, AuthenticatedUser::new(1_u64, "bob"));
        assert_eq!(user.id().to_string(), "1");
    }

    #[test]
    fn test_deserialize_string_id_keeps_extra_fields() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "id": "64f1c",
            "name": "alice",
            "email": "alice@example.com"
        }))
        .unwrap();

        assert_eq!(user.id(), &UserId::from("64f1c"));
        assert_eq!(user.name(), "alice");
        assert_eq!(user.extra("email"), Some(&json!("alice@example.com")));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<AuthenticatedUser>(json!({"id": 1}));
        assert!(result.is_err());
    }
}
