//! Typed request helpers over a [`Transport`].

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    http::{
        ApiConfig, ApiError, ApiRequest, ApiResponse, Body, Part, ReqwestTransport, Transport,
        middleware::{BearerAuth, ResponseLogging},
    },
    session::SessionStore,
};

/// Shared handle for talking to the API.
///
/// Every request goes through the same layered transport: bearer credentials are
/// attached from the session store and failures are logged before being returned.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Wrap an already assembled transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Assemble the standard layered transport for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn connect(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self, reqwest::Error> {
        Ok(Self::layered(ReqwestTransport::new(config)?, store))
    }

    /// Put the bearer and logging layers around `transport`.
    pub fn layered<T: Transport + 'static>(transport: T, store: Arc<dyn SessionStore>) -> Self {
        Self::new(Arc::new(ResponseLogging::new(BearerAuth::new(
            transport, store,
        ))))
    }

    /// Send a raw request.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(request).await
    }

    /// Send a prepared request and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.decode()
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(ApiRequest::get(path)).await
    }

    /// `GET` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        Ok(self.send(ApiRequest::get(path)).await?.body)
    }

    /// `POST` with no body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(ApiRequest::post(path)).await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be encoded, the request fails or the
    /// response does not decode.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(ApiRequest::post(path).with_body(json_body(body)?))
            .await
    }

    /// `POST` URL-encoded form fields.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let fields = fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();

        self.fetch(ApiRequest::post(path).with_body(Body::Form(fields)))
            .await
    }

    /// `POST` a multipart form.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<Part>,
    ) -> Result<T, ApiError> {
        self.fetch(ApiRequest::post(path).with_body(Body::Multipart(parts)))
            .await
    }

    /// `PUT` with no body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(ApiRequest::put(path)).await
    }

    /// `PUT` a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be encoded, the request fails or the
    /// response does not decode.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(ApiRequest::put(path).with_body(json_body(body)?))
            .await
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body does not decode.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(ApiRequest::delete(path)).await
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(ApiError::Encode)
}
