//! Authentication dispatcher.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::application::dto::{AuthOperation, FormEvent, RequestId};
use crate::application::store::StoreHandle;
use crate::domain::entities::{AuthenticatedUser, Credentials, FormKey};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Runs form submissions against the authentication port and reports each
/// one to the form store.
///
/// Every call emits `Started` and then exactly one of `Succeeded` or
/// `Failed`. Blank fields are rejected before the port is reached.
#[derive(Clone)]
pub struct AuthDispatcher {
    auth_port: Arc<dyn AuthPort>,
    store: StoreHandle,
    next_request: Arc<AtomicU64>,
}

impl AuthDispatcher {
    /// Creates new dispatcher.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, store: StoreHandle) -> Self {
        Self {
            auth_port,
            store,
            next_request: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Returns the store this dispatcher reports into.
    #[must_use]
    pub const fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Signs in, reporting into the `login` form.
    ///
    /// # Errors
    /// Returns error if a field is blank, the endpoint rejects the
    /// credentials, or the request fails.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthenticatedUser, AuthError> {
        self.submit(FormKey::LOGIN, AuthOperation::Login, credentials)
            .await
    }

    /// Registers, reporting into the `register` form.
    ///
    /// # Errors
    /// Returns error if a field is blank, the endpoint rejects the
    /// registration, or the request fails.
    pub async fn register(
        &self,
        credentials: Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.submit(FormKey::REGISTER, AuthOperation::Register, credentials)
            .await
    }

    /// Submits credentials for `operation`, reporting into `form`.
    ///
    /// # Errors
    /// Returns error if a field is blank, the endpoint rejects the
    /// credentials, or the request fails.
    pub async fn submit(
        &self,
        form: FormKey,
        operation: AuthOperation,
        credentials: Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        let request = RequestId(self.next_request.fetch_add(1, Ordering::Relaxed));
        debug!(%form, %operation, %request, name = credentials.name(), "Submitting form");

        self.store.dispatch(FormEvent::Started {
            form: form.clone(),
            request,
        });

        let outcome = self.execute(operation, &credentials).await;

        match &outcome {
            Ok(user) => {
                info!(%form, %request, user_id = %user.id(), "Submission succeeded");
                self.store.dispatch(FormEvent::Succeeded {
                    form,
                    request,
                    user: user.clone(),
                });
            }
            Err(e) => {
                warn!(%form, %request, kind = ?e.kind(), error = %e, "Submission failed");
                self.store.dispatch(FormEvent::Failed {
                    form,
                    request,
                    message: e.message().to_string(),
                });
            }
        }

        outcome
    }

    async fn execute(
        &self,
        operation: AuthOperation,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        if !credentials.is_complete() {
            debug!("Blank field, request not sent");
            return Err(AuthError::incomplete_form());
        }

        match operation {
            AuthOperation::Login => self.auth_port.login(credentials).await,
            AuthOperation::Register => self.auth_port.register(credentials).await,
        }
    }

    /// Clears the error shown for a form.
    pub fn reset_form_error(&self, form: FormKey) {
        self.store.reset_form_error(form);
    }

    /// Forgets the signed-in user.
    pub fn logout(&self) {
        info!("Logging out");
        self.store.dispatch(FormEvent::LoggedOut);
    }
}
