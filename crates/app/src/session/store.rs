//! Session store abstraction.

use mockall::automock;
use siniestros::{session::AccessToken, users::UserKind};
use thiserror::Error;

/// What survives a restart: the bearer token and the kind of account it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub token: AccessToken,
    pub user_kind: UserKind,
}

/// Durable slot for at most one [`PersistedSession`].
#[automock]
pub trait SessionStore: Send + Sync {
    /// Replace the stored session.
    fn save(&self, session: &PersistedSession) -> Result<(), StoreError>;

    /// Read the stored session, if any.
    fn load(&self) -> Result<Option<PersistedSession>, StoreError>;

    /// Remove the stored session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session file I/O failed")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt")]
    Corrupt(#[from] serde_json::Error),

    #[error("session store lock poisoned")]
    Poisoned,
}
