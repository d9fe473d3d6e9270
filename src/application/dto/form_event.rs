//! Events and commands consumed by the form store.

use std::fmt;

use crate::domain::entities::{AuthenticatedUser, FormKey};

/// Identifier of a single dispatch, increasing per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which endpoint a submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    /// Sign in with an existing account.
    Login,
    /// Create an account.
    Register,
}

impl fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Every way the form store can change.
///
/// `Started`, `Succeeded` and `Failed` form the lifecycle of one dispatch:
/// exactly one `Started` followed by exactly one of the other two. `Reset`
/// and `LoggedOut` are commands independent of any request.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A submission passed to the dispatcher.
    Started { form: FormKey, request: RequestId },
    /// The endpoint accepted the submission.
    Succeeded {
        form: FormKey,
        request: RequestId,
        user: AuthenticatedUser,
    },
    /// The submission failed for any reason.
    Failed {
        form: FormKey,
        request: RequestId,
        message: String,
    },
    /// Clear the error shown for a form.
    Reset { form: FormKey },
    /// Forget the signed-in user.
    LoggedOut,
}

impl FormEvent {
    /// Returns the form this event targets, if any.
    #[must_use]
    pub const fn form(&self) -> Option<&FormKey> {
        match self {
            Self::Started { form, .. }
            | Self::Succeeded { form, .. }
            | Self::Failed { form, .. }
            | Self::Reset { form } => Some(form),
            Self::LoggedOut => None,
        }
    }

    /// Returns the short event name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
            Self::Reset { .. } => "reset",
            Self::LoggedOut => "logged_out",
        }
    }
}
