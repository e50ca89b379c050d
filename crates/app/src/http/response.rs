//! Successful responses.

use serde::de::DeserializeOwned;

use crate::http::ApiError;

/// Successful (2xx) response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Declared media type of the body.
    pub content_type: Option<String>,

    /// Raw body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// A 200 response carrying `value` as JSON.
    #[must_use]
    pub fn json(value: &serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: value.to_string().into_bytes(),
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Decode)
    }
}
