//! Presentation layer binding form inputs to the form store.

/// Headless form binding.
pub mod form_binding;

pub use form_binding::{Field, FormBinding};
