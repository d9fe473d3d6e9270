use serde::{Deserialize, Serialize};

use crate::domain::entities::Credentials;

/// Request body sent to the login and register endpoints.
#[derive(Debug, Serialize)]
pub struct CredentialsPayload<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for CredentialsPayload<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            name: credentials.name(),
            password: credentials.password(),
        }
    }
}

/// Error body returned with a 4xx status.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason, shown to the user as is.
    pub error: String,
}
