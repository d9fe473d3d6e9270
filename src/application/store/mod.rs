//! State container for form errors and the signed-in user.

mod form_store;

pub use form_store::{FormState, FormStore, StoreHandle, get_form_error};
