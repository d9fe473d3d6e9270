//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthenticatedUser, Credentials, FormKey, UserId};
pub use errors::{AuthError, ErrorKind};
pub use ports::AuthPort;
