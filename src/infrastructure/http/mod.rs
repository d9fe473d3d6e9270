//! HTTP adapter for the authentication endpoint.

mod client;
mod dto;

pub use client::HttpAuthClient;
