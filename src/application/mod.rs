//! Application layer with the dispatcher, form store, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Form state container.
pub mod store;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthOperation, FormEvent, RequestId};
pub use store::{FormState, FormStore, StoreHandle, get_form_error};
pub use use_cases::AuthDispatcher;
