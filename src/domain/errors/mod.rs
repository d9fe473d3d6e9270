//! Domain error types.

mod auth_error;

pub use auth_error::{AuthError, ErrorKind, INCOMPLETE_FORM_MESSAGE};
