//! Domain entity definitions.

mod credentials;
mod form;
mod user;

pub use credentials::Credentials;
pub use form::FormKey;
pub use user::{AuthenticatedUser, UserId};
