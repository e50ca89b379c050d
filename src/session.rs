//! Session state
//!
//! A [`Session`] is an immutable snapshot of where authentication stands. The bearer token,
//! the identity and the user kind live together inside [`AuthState::Authenticated`], so a
//! snapshot can never carry a user without a token. Every convenience flag (`is_loading`,
//! `is_authenticated`, `is_agent`, ...) is derived from the state and cannot be set on its own.

use std::fmt;

use crate::users::{User, UserKind};

/// Opaque bearer credential issued at login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, as sent in the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(**redacted**)")
    }
}

/// Authentication lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Process started; bootstrap has not run yet.
    #[default]
    Unknown,

    /// An auth operation (bootstrap, login) is in flight.
    Checking,

    /// Token verified and identity fetched.
    Authenticated {
        /// Bearer credential for this session.
        token: AccessToken,

        /// Identity returned by the verification endpoint.
        user: User,

        /// Kind reported at login or restored from storage.
        kind: UserKind,
    },

    /// No valid credentials.
    Anonymous,
}

/// Snapshot of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    state: AuthState,
    last_error: Option<String>,
}

impl Session {
    /// Session as it exists before bootstrap.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Snapshot for an in-flight auth operation. Clears any previous error.
    #[must_use]
    pub fn checking() -> Self {
        Self {
            state: AuthState::Checking,
            last_error: None,
        }
    }

    /// Logged-out snapshot without an error.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            state: AuthState::Anonymous,
            last_error: None,
        }
    }

    /// Logged-out snapshot recording why the last operation failed.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: AuthState::Anonymous,
            last_error: Some(message.into()),
        }
    }

    /// Authenticated snapshot.
    #[must_use]
    pub fn authenticated(token: AccessToken, user: User, kind: UserKind) -> Self {
        Self {
            state: AuthState::Authenticated { token, user, kind },
            last_error: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Message from the most recent failed operation.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `true` until bootstrap has settled and while any auth operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AuthState::Unknown | AuthState::Checking)
    }

    /// `true` once an identity has been verified.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    /// Bearer token held by this session.
    #[must_use]
    pub fn token(&self) -> Option<&AccessToken> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Verified identity.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Kind of the authenticated account.
    #[must_use]
    pub fn user_kind(&self) -> Option<UserKind> {
        match &self.state {
            AuthState::Authenticated { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// `true` for an authenticated agent.
    #[must_use]
    pub fn is_agent(&self) -> bool {
        self.user_kind() == Some(UserKind::Agent)
    }

    /// `true` for an authenticated regular user.
    #[must_use]
    pub fn is_regular_user(&self) -> bool {
        self.user_kind() == Some(UserKind::Regular)
    }
}
