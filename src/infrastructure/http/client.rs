//! Authentication endpoint HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{CredentialsPayload, ErrorResponse};
use crate::domain::entities::{AuthenticatedUser, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;
use crate::infrastructure::config::EndpointConfig;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authentication endpoint client.
///
/// Sends one POST per call and turns the response into a user or an
/// [`AuthError`]. Nothing is retried.
pub struct HttpAuthClient {
    client: Client,
    login_url: String,
    register_url: String,
}

impl HttpAuthClient {
    /// Creates client from endpoint configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &EndpointConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuthError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates client with default paths under a custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        Self::new(&EndpointConfig {
            base_url: base_url.into(),
            ..EndpointConfig::default()
        })
    }

    /// Creates client around an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, config: &EndpointConfig) -> Self {
        Self {
            client,
            login_url: config.url_for(&config.login_path),
            register_url: config.url_for(&config.register_path),
        }
    }

    async fn post_credentials(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        debug!(url, name = credentials.name(), "Sending credentials");

        let response = self
            .client
            .post(url)
            .json(&CredentialsPayload::from(credentials))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach authentication endpoint");
                if e.is_timeout() {
                    AuthError::transport("request timed out")
                } else if e.is_connect() {
                    AuthError::transport("failed to connect to authentication server")
                } else {
                    AuthError::transport(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let user: AuthenticatedUser = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse user response");
            AuthError::transport(format!("failed to parse response: {e}"))
        })?;

        debug!(user_id = %user.id(), name = user.name(), "Credentials accepted");

        Ok(user)
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> AuthError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) if !body.error.trim().is_empty() => Some(body.error),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Error response has no readable body");
                None
            }
        };

        debug!(%status, has_message = message.is_some(), "Credentials rejected");

        match message {
            Some(message) if status.is_client_error() => AuthError::authentication(message),
            Some(message) => AuthError::transport(message),
            None => AuthError::transport(format!("unexpected response: HTTP {status}")),
        }
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        self.post_credentials(&self.login_url, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        self.post_credentials(&self.register_url, credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpAuthClient::with_base_url("http://localhost:3000/");
        assert!(client.is_ok());

        let client = client.unwrap();
        assert_eq!(client.login_url, "http://localhost:3000/api/login");
        assert_eq!(client.register_url, "http://localhost:3000/api/register");
    }

    #[test]
    fn test_custom_paths() {
        let config = EndpointConfig {
            base_url: "https://auth.example.com".to_string(),
            login_path: "signin".to_string(),
            register_path: "/signup".to_string(),
            timeout_secs: 5,
        };
        let client = HttpAuthClient::new(&config).unwrap();

        assert_eq!(client.login_url, "https://auth.example.com/signin");
        assert_eq!(client.register_url, "https://auth.example.com/signup");
    }
}
