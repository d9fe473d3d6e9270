//! Data transfer objects for the application layer.

mod form_event;

pub use form_event::{AuthOperation, FormEvent, RequestId};
