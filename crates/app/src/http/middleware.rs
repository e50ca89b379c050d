//! Transport layers applied to every request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::{
    http::{ApiError, ApiRequest, ApiResponse, Transport},
    session::SessionStore,
};

/// Attaches the persisted bearer token to outgoing requests.
///
/// The store is read on every request so a token saved or cleared by the session
/// controller takes effect immediately.
pub struct BearerAuth<T> {
    inner: T,
    store: Arc<dyn SessionStore>,
}

impl<T> BearerAuth<T> {
    #[must_use]
    pub fn new(inner: T, store: Arc<dyn SessionStore>) -> Self {
        Self { inner, store }
    }
}

impl<T> std::fmt::Debug for BearerAuth<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Transport> Transport for BearerAuth<T> {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        match self.store.load() {
            Ok(Some(session)) => {
                debug!(path = %request.path, "attaching bearer token");

                request.set_bearer(session.token.expose());
            }
            Ok(None) => {
                debug!(path = %request.path, "no stored token, sending anonymously");
            }
            Err(source) => {
                warn!(path = %request.path, "failed to read stored session: {source}");
            }
        }

        self.inner.send(request).await
    }
}

/// Logs failed responses and passes every outcome through unchanged.
#[derive(Debug)]
pub struct ResponseLogging<T> {
    inner: T,
}

impl<T> ResponseLogging<T> {
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: Transport> Transport for ResponseLogging<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method.clone();
        let path = request.path.clone();

        match self.inner.send(request).await {
            Ok(response) => {
                debug!(%method, %path, status = response.status, "request succeeded");

                Ok(response)
            }
            Err(source) => {
                error!(%method, %path, status = ?source.status(), "request failed: {source}");

                Err(source)
            }
        }
    }
}
