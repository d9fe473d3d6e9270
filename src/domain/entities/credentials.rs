//! Login credentials value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Name and password pair submitted by a form.
///
/// The password is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    name: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from raw input values.
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// Returns the account name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the password as entered.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns whether both fields contain something besides whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}
