//! Outgoing requests.

use reqwest::{Method, header::AUTHORIZATION};

/// Request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body.
    #[default]
    Empty,

    /// JSON document.
    Json(serde_json::Value),

    /// URL-encoded form fields.
    Form(Vec<(String, String)>),

    /// Multipart form.
    Multipart(Vec<Part>),
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,

        /// Field value.
        value: String,
    },

    /// File field.
    File {
        /// Field name.
        name: String,

        /// File attached to the field.
        file: FileAttachment,
    },
}

/// File contents plus the metadata sent alongside them.
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    /// File name reported to the server.
    pub file_name: String,

    /// Media type reported to the server.
    pub media_type: String,

    /// Raw contents.
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Wrap file contents, guessing the media type from the file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let media_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            file_name,
            media_type,
            bytes,
        }
    }
}

impl std::fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAttachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Request against the API, addressed by path relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Path below the base URL, starting with `/`.
    pub path: String,

    /// Query string pairs, URL-encoded by the transport.
    pub query: Vec<(String, String)>,

    /// Extra headers, in insertion order.
    pub headers: Vec<(String, String)>,

    /// Request body.
    pub body: Body,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    /// Value of query parameter `name`.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Replace any existing header `name` with `value`.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value));
    }

    /// Attach a bearer credential.
    pub fn set_bearer(&mut self, token: &str) {
        self.set_header(AUTHORIZATION.as_str(), format!("Bearer {token}"));
    }

    /// Token of the `Authorization: Bearer` header, if present and well formed.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.header(AUTHORIZATION.as_str())?;
        let mut parts = value.splitn(2, ' ');

        let scheme = parts.next()?;
        let token = parts.next()?.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(token)
    }

    /// Value of field `name` in a URL-encoded form body.
    #[must_use]
    pub fn form_field(&self, name: &str) -> Option<&str> {
        let Body::Form(fields) = &self.body else {
            return None;
        };

        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_keep_raw_values() {
        let request = ApiRequest::post("/api/documents/upload/3").with_query("document_type", "Póliza");

        assert_eq!(request.path, "/api/documents/upload/3");
        assert_eq!(request.query_param("document_type"), Some("Póliza"));
        assert_eq!(request.query_param("page"), None);
    }

    #[test]
    fn set_bearer_replaces_existing_authorization() {
        let mut request = ApiRequest::get("/api/siniestros");
        request.set_header("authorization", "Basic abc".to_string());

        request.set_bearer("tok-1");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.bearer_token(), Some("tok-1"));
    }

    #[test]
    fn bearer_token_requires_bearer_scheme() {
        let mut request = ApiRequest::get("/api/siniestros");
        request.set_header("Authorization", "Basic abc".to_string());

        assert_eq!(request.bearer_token(), None);
    }

    #[test]
    fn attachment_media_type_is_guessed_from_name() {
        assert_eq!(
            FileAttachment::new("poliza.pdf", vec![1]).media_type,
            "application/pdf"
        );
        assert_eq!(
            FileAttachment::new("foto.JPG", vec![1]).media_type,
            "image/jpeg"
        );
        assert_eq!(
            FileAttachment::new("sin-extension", vec![1]).media_type,
            "application/octet-stream"
        );
    }
}
