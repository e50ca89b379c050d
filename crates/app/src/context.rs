//! Client Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        claims::{ClaimsService, HttpClaimsService},
        documents::{DocumentsService, HttpDocumentsService},
    },
    http::{ApiClient, ApiConfig},
    session::{SessionController, SessionStore},
};

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("failed to build HTTP client")]
    Http(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct ClientContext {
    pub api: ApiClient,
    pub session: Arc<SessionController>,
    pub claims: Arc<dyn ClaimsService>,
    pub documents: Arc<dyn DocumentsService>,
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ClientContext {
    /// Build the client context for an API server.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn connect(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self, ClientInitError> {
        let api = ApiClient::connect(config, store.clone()).map_err(ClientInitError::Http)?;

        Ok(Self::with_client(api, store))
    }

    /// Build the client context around an existing [`ApiClient`].
    #[must_use]
    pub fn with_client(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self {
            session: Arc::new(SessionController::new(api.clone(), store)),
            claims: Arc::new(HttpClaimsService::new(api.clone())),
            documents: Arc::new(HttpDocumentsService::new(api.clone())),
            api,
        }
    }
}
