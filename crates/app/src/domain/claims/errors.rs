//! Claims service errors.

use siniestros::validation::ValidationError;
use thiserror::Error;

use crate::http::ApiError;

#[derive(Debug, Error)]
pub enum ClaimsServiceError {
    /// Server answered 404; carries its `detail` when it sent one.
    #[error("{}", .0.as_deref().unwrap_or("claim not found"))]
    NotFound(Option<String>),

    #[error("nothing to update")]
    EmptyUpdate,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for ClaimsServiceError {
    fn from(error: ApiError) -> Self {
        if error.status() == Some(404) {
            return Self::NotFound(error.detail().map(str::to_string));
        }

        Self::Api(error)
    }
}
