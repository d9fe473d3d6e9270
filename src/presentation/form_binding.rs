//! Headless binding between a credentials form and the form store.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;
use zeroize::Zeroizing;

use crate::application::dto::AuthOperation;
use crate::application::store::FormState;
use crate::application::use_cases::AuthDispatcher;
use crate::domain::entities::{AuthenticatedUser, Credentials, FormKey};
use crate::domain::errors::AuthError;

/// Tracked input of a credentials form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Password,
}

/// View-side state of one form.
///
/// Holds what the user typed and mirrors the store's error slot for this
/// form. Every edit clears the slot so a stale error never outlives the
/// input that caused it.
pub struct FormBinding {
    form: FormKey,
    operation: AuthOperation,
    name: String,
    password: Zeroizing<String>,
    dispatcher: AuthDispatcher,
    snapshot: watch::Receiver<Arc<FormState>>,
}

impl FormBinding {
    /// Creates binding for `operation`, reporting into `form`.
    #[must_use]
    pub fn new(form: FormKey, operation: AuthOperation, dispatcher: AuthDispatcher) -> Self {
        let snapshot = dispatcher.store().subscribe();
        Self {
            form,
            operation,
            name: String::new(),
            password: Zeroizing::new(String::new()),
            dispatcher,
            snapshot,
        }
    }

    /// Creates the login form binding.
    #[must_use]
    pub fn login(dispatcher: AuthDispatcher) -> Self {
        Self::new(FormKey::LOGIN, AuthOperation::Login, dispatcher)
    }

    /// Creates the registration form binding.
    #[must_use]
    pub fn register(dispatcher: AuthDispatcher) -> Self {
        Self::new(FormKey::REGISTER, AuthOperation::Register, dispatcher)
    }

    /// Returns the form key.
    #[must_use]
    pub const fn form(&self) -> &FormKey {
        &self.form
    }

    /// Returns current field value.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Password => &self.password,
        }
    }

    /// Replaces a field value.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        self.on_edit(field);
    }

    /// Appends a typed character.
    pub fn input_char(&mut self, field: Field, c: char) {
        self.field_mut(field).push(c);
        self.on_edit(field);
    }

    /// Removes the last character.
    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).pop();
        self.on_edit(field);
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Password => &mut self.password,
        }
    }

    fn on_edit(&self, field: Field) {
        trace!(form = %self.form, ?field, "Field edited, clearing error");
        self.dispatcher.reset_form_error(self.form.clone());
    }

    /// Returns the error currently shown for this form.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.snapshot
            .borrow()
            .form_error(&self.form)
            .map(str::to_owned)
    }

    /// Returns whether a submission is awaiting its result.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.snapshot.borrow().is_submitting(&self.form)
    }

    /// Returns the signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<AuthenticatedUser> {
        self.snapshot.borrow().user().cloned()
    }

    /// Submits the current values.
    ///
    /// # Errors
    /// Returns the dispatcher's error; it is also reported to the store.
    pub async fn submit(&self) -> Result<AuthenticatedUser, AuthError> {
        let credentials = Credentials::new(self.name.as_str(), self.password.as_str());
        self.dispatcher
            .submit(self.form.clone(), self.operation, credentials)
            .await
    }

    /// Waits until the store reflects every event queued so far, including
    /// the result of the last `submit`.
    ///
    /// Returns `false` if the store shut down first.
    pub async fn settled(&self) -> bool {
        self.dispatcher.store().settled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::FormStore;
    use crate::domain::ports::mocks::MockAuthPort;

    fn binding(port: MockAuthPort) -> (FormStore, FormBinding) {
        let (store, handle) = FormStore::new();
        let dispatcher = AuthDispatcher::new(Arc::new(port), handle);
        (store, FormBinding::login(dispatcher))
    }

    #[tokio::test]
    async fn test_edit_clears_error() {
        let (mut store, mut form) = binding(MockAuthPort::rejecting("wrong password"));
        form.set_value(Field::Name, "bob");
        form.set_value(Field::Password, "nope");

        assert!(form.submit().await.is_err());
        store.drain();
        assert_eq!(form.error().as_deref(), Some("wrong password"));

        form.input_char(Field::Password, '!');
        store.drain();
        assert_eq!(form.error(), None);
        assert_eq!(form.value(Field::Password), "nope!");
    }

    #[tokio::test]
    async fn test_edit_of_other_form_keeps_error() {
        let (mut store, handle) = FormStore::new();
        let dispatcher = AuthDispatcher::new(
            Arc::new(MockAuthPort::rejecting("name taken")),
            handle,
        );
        let mut login = FormBinding::login(dispatcher.clone());
        let register = FormBinding::register(dispatcher);

        let _ = register.submit().await;
        login.backspace(Field::Name);
        store.drain();

        assert_eq!(register.error().as_deref(), Some("Не все поля заполнены"));
        assert_eq!(login.error(), None);
    }

    #[tokio::test]
    async fn test_settled_after_store_applies_result() {
        let (store, mut form) = binding(MockAuthPort::accepting(AuthenticatedUser::new(
            7_u64, "bob",
        )));
        let task = tokio::spawn(store.run());
        form.set_value(Field::Name, "bob");
        form.set_value(Field::Password, "pw");

        form.submit().await.unwrap();

        assert!(form.settled().await);
        assert!(!form.is_submitting());
        assert_eq!(form.user(), Some(AuthenticatedUser::new(7_u64, "bob")));
        drop(form);
        task.await.unwrap();
    }
}
