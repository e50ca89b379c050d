//! Documents service.

use async_trait::async_trait;
use mockall::automock;
use siniestros::{
    documents::{Document, DocumentId, OcrResult, download_path},
    routes::ClaimId,
    validation::require,
};
use tracing::info;

use crate::{
    domain::documents::DocumentsServiceError,
    http::{ApiClient, ApiRequest, Body, FileAttachment, Part},
};

const DOCUMENTS_PATH: &str = "/api/documents";
const OCR_DIRECT_PATH: &str = "/api/documents/ocr-direct";

/// File plus the declared document type, as submitted by the upload form.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub document_type: String,
    pub file: FileAttachment,
}

#[derive(Debug, Clone)]
pub struct HttpDocumentsService {
    api: ApiClient,
}

impl HttpDocumentsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn file_part(file: FileAttachment) -> Part {
    Part::File {
        name: "file".to_string(),
        file,
    }
}

#[async_trait]
impl DocumentsService for HttpDocumentsService {
    async fn list_documents(&self) -> Result<Vec<Document>, DocumentsServiceError> {
        Ok(self.api.get_json(DOCUMENTS_PATH).await?)
    }

    async fn list_claim_documents(
        &self,
        claim: ClaimId,
    ) -> Result<Vec<Document>, DocumentsServiceError> {
        Ok(self
            .api
            .get_json(&format!("/api/documents/by-siniestro/{claim}"))
            .await?)
    }

    async fn upload_document(
        &self,
        claim: ClaimId,
        upload: DocumentUpload,
    ) -> Result<Document, DocumentsServiceError> {
        require("document type", &upload.document_type)?;
        require("file name", &upload.file.file_name)?;

        // The server reads the type from the query string; the form field mirrors it.
        let request = ApiRequest::post(format!("/api/documents/upload/{claim}"))
            .with_query("document_type", upload.document_type.clone())
            .with_body(Body::Multipart(vec![
                file_part(upload.file),
                Part::Text {
                    name: "document_type".to_string(),
                    value: upload.document_type,
                },
            ]));

        let document: Document = self.api.fetch(request).await?;

        info!(document = document.id, claim, "document uploaded");

        Ok(document)
    }

    async fn run_ocr(&self, document: DocumentId) -> Result<OcrResult, DocumentsServiceError> {
        Ok(self
            .api
            .post_empty(&format!("/api/documents/ocr/{document}"))
            .await?)
    }

    async fn run_ocr_on_file(
        &self,
        file: FileAttachment,
    ) -> Result<OcrResult, DocumentsServiceError> {
        require("file name", &file.file_name)?;

        Ok(self
            .api
            .post_multipart(OCR_DIRECT_PATH, vec![file_part(file)])
            .await?)
    }

    async fn validate_document(
        &self,
        document: DocumentId,
    ) -> Result<Document, DocumentsServiceError> {
        let validated: Document = self
            .api
            .put_empty(&format!("/api/documents/{document}/validate"))
            .await?;

        info!(document = validated.id, "document validated");

        Ok(validated)
    }

    async fn download_document(
        &self,
        document: DocumentId,
    ) -> Result<Vec<u8>, DocumentsServiceError> {
        Ok(self.api.get_bytes(&download_path(document)).await?)
    }
}

#[automock]
#[async_trait]
pub trait DocumentsService: Send + Sync {
    /// Documents visible to the current user.
    async fn list_documents(&self) -> Result<Vec<Document>, DocumentsServiceError>;

    /// Documents attached to one claim.
    async fn list_claim_documents(
        &self,
        claim: ClaimId,
    ) -> Result<Vec<Document>, DocumentsServiceError>;

    /// Attach a file to a claim.
    async fn upload_document(
        &self,
        claim: ClaimId,
        upload: DocumentUpload,
    ) -> Result<Document, DocumentsServiceError>;

    /// Run OCR over a stored document.
    async fn run_ocr(&self, document: DocumentId) -> Result<OcrResult, DocumentsServiceError>;

    /// Run OCR over a file that is not stored.
    async fn run_ocr_on_file(
        &self,
        file: FileAttachment,
    ) -> Result<OcrResult, DocumentsServiceError>;

    /// Mark a document as validated.
    async fn validate_document(
        &self,
        document: DocumentId,
    ) -> Result<Document, DocumentsServiceError>;

    /// Raw contents of a stored document.
    async fn download_document(
        &self,
        document: DocumentId,
    ) -> Result<Vec<u8>, DocumentsServiceError>;
}
