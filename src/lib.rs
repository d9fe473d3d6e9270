//! Formgate - authenticated form submission with store-backed error state.
//!
//! This crate carries a login or registration attempt from a form binding,
//! through a dispatcher and an HTTP client, into a single-owner store that
//! holds the error shown for each form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the dispatcher, store, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing form bindings.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "formgate";
