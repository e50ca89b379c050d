//! Session store backed by a JSON file.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use siniestros::{session::AccessToken, users::UserKind};
use tracing::debug;

use crate::session::{PersistedSession, SessionStore, StoreError};

const APP_DIR: &str = "siniestros";
const FILE_NAME: &str = "session.json";

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
    user_type: UserKind,
}

/// Persists the session as a small JSON document.
///
/// Writes go to a sibling temporary file which is then renamed over the target, so a
/// crash never leaves a half-written session behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/siniestros/session.json`, falling back to the working directory
    /// when the platform has no config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_default()
            .join(FILE_NAME)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");

        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_vec(&StoredSession {
            token: session.token.expose().to_string(),
            user_type: session.user_kind,
        })?;

        let temporary = self.temporary_path();
        let mut file = create_private(&temporary)?;
        file.write_all(&contents)?;
        file.sync_all()?;

        fs::rename(&temporary, &self.path)?;

        debug!(path = %self.path.display(), "session saved");

        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        let stored: StoredSession = serde_json::from_slice(&contents)?;

        if stored.token.is_empty() {
            return Ok(None);
        }

        Ok(Some(PersistedSession {
            token: AccessToken::new(stored.token),
            user_kind: stored.user_type,
        }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");

                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn agent_session() -> PersistedSession {
        PersistedSession {
            token: AccessToken::new("tok-agent"),
            user_kind: UserKind::Agent,
        }
    }

    #[test]
    fn missing_file_loads_as_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn saved_session_survives_a_new_store() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("session.json");

        FileSessionStore::new(&path).save(&agent_session())?;

        assert_eq!(FileSessionStore::new(&path).load()?, Some(agent_session()));

        Ok(())
    }

    #[test]
    fn file_uses_wire_tags() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.save(&agent_session())?;

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(store.path())?)?;

        assert_eq!(
            raw,
            serde_json::json!({"token": "tok-agent", "user_type": "agent"})
        );

        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.save(&agent_session())?;
        store.clear()?;
        store.clear()?;

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn corrupt_file_is_reported() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, b"{not json")?;

        let result = FileSessionStore::new(&path).load();

        assert!(
            matches!(result, Err(StoreError::Corrupt(_))),
            "expected Corrupt, got {result:?}"
        );

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() -> TestResult {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.save(&agent_session())?;

        let mode = fs::metadata(store.path())?.permissions().mode();

        assert_eq!(mode & 0o777, 0o600);

        Ok(())
    }
}
