//! Session controller errors.

use thiserror::Error;

use crate::{http::ApiError, session::StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to access the stored session")]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Message to show the user, using the server's explanation when there is one.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(source) => source.display_message(fallback),
            Self::Store(_) => fallback.to_string(),
        }
    }
}
