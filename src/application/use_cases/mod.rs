//! Use case implementations.

mod auth_dispatcher;

pub use auth_dispatcher::AuthDispatcher;
