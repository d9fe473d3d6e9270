//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthenticatedUser, Credentials};
use crate::domain::errors::AuthError;

/// Port for the remote authentication endpoint.
///
/// Implementations send exactly one request per call, never retry, and keep
/// no state between calls.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Signs in with existing credentials.
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;

    /// Creates an account and signs in with it.
    async fn register(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;
}
