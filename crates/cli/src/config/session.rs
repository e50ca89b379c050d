//! Session Config

use std::path::PathBuf;

use clap::Args;
use siniestros_app::session::FileSessionStore;

/// Session persistence settings.
#[derive(Debug, Args)]
pub(crate) struct SessionConfig {
    /// File holding the persisted session token (defaults to the user config directory)
    #[arg(long, env = "SINIESTROS_SESSION_FILE")]
    pub session_file: Option<PathBuf>,
}

impl SessionConfig {
    /// Store backed by the configured session file.
    #[must_use]
    pub(crate) fn store(&self) -> FileSessionStore {
        FileSessionStore::new(
            self.session_file
                .clone()
                .unwrap_or_else(FileSessionStore::default_path),
        )
    }
}
