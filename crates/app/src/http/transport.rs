//! Request transport.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
    multipart,
};

use crate::http::{ApiError, ApiRequest, ApiResponse, Body, Part};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the claims API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server address, e.g. `"http://localhost:8000"`.
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when unset.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Sends requests and classifies the outcome.
///
/// Implementations return `Ok` only for 2xx responses; everything else becomes an
/// [`ApiError`].
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// [`Transport`] over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport for `config`.
    ///
    /// JSON is the default content type; form and multipart bodies override it.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self.http.request(request.method, &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Form(fields) => builder.form(&fields),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|error| ApiError::network(&error))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|error| ApiError::network(&error))?
            .to_vec();

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

fn multipart_form(parts: Vec<Part>) -> Result<multipart::Form, ApiError> {
    let mut form = multipart::Form::new();

    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File { name, file } => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.media_type)
                    .map_err(|error| ApiError::Request(error.to_string()))?;

                form.part(name, part)
            }
        };
    }

    Ok(form)
}
