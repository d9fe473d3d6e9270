//! Form identifiers.

use std::borrow::Cow;
use std::fmt;

/// Stable key naming an independent error slot.
///
/// Errors stored under one key never affect another, so the login and
/// registration forms can fail and recover independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormKey(Cow<'static, str>);

impl FormKey {
    /// Login form.
    pub const LOGIN: Self = Self(Cow::Borrowed("login"));
    /// Registration form.
    pub const REGISTER: Self = Self(Cow::Borrowed("register"));

    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
