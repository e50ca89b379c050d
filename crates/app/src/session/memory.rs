//! In-process session store.

use std::sync::Mutex;

use crate::session::{PersistedSession, SessionStore, StoreError};

/// Session store that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        *self.slot.lock().map_err(|_poisoned| StoreError::Poisoned)? = Some(session.clone());

        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        Ok(self
            .slot
            .lock()
            .map_err(|_poisoned| StoreError::Poisoned)?
            .clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().map_err(|_poisoned| StoreError::Poisoned)? = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use siniestros::{session::AccessToken, users::UserKind};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn load_before_save_is_empty() -> TestResult {
        assert_eq!(MemorySessionStore::default().load()?, None);

        Ok(())
    }

    #[test]
    fn save_overwrites_and_clear_empties() -> TestResult {
        let store = MemorySessionStore::default();
        let agent = PersistedSession {
            token: AccessToken::new("tok-agent"),
            user_kind: UserKind::Agent,
        };

        store.save(&PersistedSession {
            token: AccessToken::new("tok-user"),
            user_kind: UserKind::Regular,
        })?;
        store.save(&agent)?;

        assert_eq!(store.load()?, Some(agent));

        store.clear()?;
        store.clear()?;

        assert_eq!(store.load()?, None);

        Ok(())
    }
}
