//! Documents attached to claims.

use std::collections::BTreeMap;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{listing::Searchable, routes::ClaimId};

/// Document identifier as assigned by the API server.
pub type DocumentId = i64;

/// Document types offered by the upload form.
pub const DOCUMENT_TYPES: [&str; 7] = [
    "INE",
    "Póliza",
    "Comprobante",
    "Factura",
    "Reporte",
    "Fotografía",
    "Otro",
];

/// Media type that selects the PDF viewer.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media types that select the inline image viewer.
pub const IMAGE_MEDIA_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/webp",
];

const IMAGE_EXTENSIONS: [&str; 6] = ["jpeg", "jpg", "png", "gif", "bmp", "webp"];

/// Document as returned by the API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Server-side identifier.
    pub id: DocumentId,

    /// Original file name.
    #[serde(default)]
    pub name: String,

    /// Declared document type, e.g. `INE`.
    #[serde(default)]
    pub document_type: String,

    /// Storage path on the server.
    pub path: String,

    /// When the file was uploaded.
    pub upload_date: DateTime,

    /// Whether an agent has validated the document.
    pub validated: bool,

    /// Claim the document belongs to.
    pub siniestro_id: ClaimId,
}

impl Document {
    /// How this document should be displayed.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::resolve(Some(&self.name), None)
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.document_type.as_str()].into_iter()
    }
}

/// Display class of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Rendered in an embedded frame.
    Pdf,

    /// Rendered inline.
    Image,

    /// Offered as a download only.
    Other,
}

impl DocumentKind {
    /// Classify a document from its file name and/or declared media type.
    ///
    /// Only the name suffix and the declared type are consulted; file contents are never
    /// sniffed, so a mislabelled file is classified by its label.
    #[must_use]
    pub fn resolve(name: Option<&str>, media_type: Option<&str>) -> Self {
        let extension = name.and_then(extension);

        if extension.as_deref() == Some("pdf") || media_type == Some(PDF_MEDIA_TYPE) {
            return Self::Pdf;
        }

        let image_extension = extension
            .as_deref()
            .is_some_and(|extension| IMAGE_EXTENSIONS.contains(&extension));
        let image_type = media_type.is_some_and(|media_type| IMAGE_MEDIA_TYPES.contains(&media_type));

        if image_extension || image_type {
            return Self::Image;
        }

        Self::Other
    }
}

/// Lower-cased text after the last `.`, if the name has one.
fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}

/// Rendering strategy for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Embedded frame pointed at `url`.
    Frame {
        /// Frame source, fitted to width.
        url: String,
    },

    /// Inline image loaded from `url`.
    Inline {
        /// Image source.
        url: String,
    },

    /// Download link only.
    Download {
        /// File source.
        url: String,
    },

    /// Nothing to show.
    Empty,
}

impl Viewer {
    /// Choose a viewer for a document.
    ///
    /// The content URL is `explicit_url` when given, otherwise the download endpoint of
    /// `document_id`. Without either there is nothing to display.
    #[must_use]
    pub fn select(
        document_id: Option<DocumentId>,
        explicit_url: Option<&str>,
        name: Option<&str>,
        media_type: Option<&str>,
    ) -> Self {
        let url = match (explicit_url, document_id) {
            (Some(url), _) if !url.is_empty() => url.to_string(),
            (_, Some(id)) => download_path(id),
            _ => return Self::Empty,
        };

        match DocumentKind::resolve(name, media_type) {
            DocumentKind::Pdf => Self::Frame {
                url: format!("{url}#view=FitH"),
            },
            DocumentKind::Image => Self::Inline { url },
            DocumentKind::Other => Self::Download { url },
        }
    }

    /// Viewer for a stored document.
    #[must_use]
    pub fn for_document(document: &Document) -> Self {
        Self::select(Some(document.id), None, Some(&document.name), None)
    }
}

/// API path serving the raw bytes of a document.
#[must_use]
pub fn download_path(id: DocumentId) -> String {
    format!("/api/documents/download/{id}")
}

/// OCR output.
///
/// Identity cards (`INE`) come back as named fields; everything else as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OcrResult {
    /// Structured fields extracted from an identity document.
    Fields {
        /// Field name to extracted value (`None` when not found).
        data: BTreeMap<String, Option<String>>,
    },

    /// Free text.
    Text {
        /// Extracted text.
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn uppercase_pdf_name_is_pdf() {
        assert_eq!(DocumentKind::resolve(Some("scan.PDF"), None), DocumentKind::Pdf);
    }

    #[test]
    fn uppercase_jpg_name_is_image() {
        assert_eq!(
            DocumentKind::resolve(Some("photo.JPG"), None),
            DocumentKind::Image
        );
    }

    #[test]
    fn declared_pdf_type_without_name_is_pdf() {
        assert_eq!(
            DocumentKind::resolve(None, Some("application/pdf")),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn word_document_is_other() {
        assert_eq!(
            DocumentKind::resolve(Some("contract.docx"), None),
            DocumentKind::Other
        );
    }

    #[test]
    fn declared_image_type_is_image() {
        for media_type in IMAGE_MEDIA_TYPES {
            assert_eq!(
                DocumentKind::resolve(Some("blob"), Some(media_type)),
                DocumentKind::Image
            );
        }
    }

    #[test]
    fn pdf_wins_over_image_type() {
        assert_eq!(
            DocumentKind::resolve(Some("factura.pdf"), Some("image/png")),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn suffix_without_dot_is_not_an_extension() {
        assert_eq!(DocumentKind::resolve(Some("pdf"), None), DocumentKind::Other);
        assert_eq!(DocumentKind::resolve(Some("notapng"), None), DocumentKind::Other);
    }

    #[test]
    fn media_type_match_is_exact() {
        assert_eq!(
            DocumentKind::resolve(None, Some("Application/PDF")),
            DocumentKind::Other
        );
    }

    #[test]
    fn pdf_viewer_fits_width() {
        assert_eq!(
            Viewer::select(Some(4), None, Some("poliza.pdf"), None),
            Viewer::Frame {
                url: "/api/documents/download/4#view=FitH".to_string()
            }
        );
    }

    #[test]
    fn explicit_url_wins_over_document_id() {
        assert_eq!(
            Viewer::select(Some(4), Some("blob:abc"), Some("foto.png"), None),
            Viewer::Inline {
                url: "blob:abc".to_string()
            }
        );
    }

    #[test]
    fn viewer_without_source_is_empty() {
        assert_eq!(Viewer::select(None, None, Some("foto.png"), None), Viewer::Empty);
    }

    #[test]
    fn ocr_result_reads_text_or_fields() -> TestResult {
        let text: OcrResult = serde_json::from_str(r#"{"text":"hola"}"#)?;
        let fields: OcrResult =
            serde_json::from_str(r#"{"data":{"nombre":"ANA","curp":null}}"#)?;

        assert_eq!(
            text,
            OcrResult::Text {
                text: "hola".to_string()
            }
        );
        assert!(matches!(fields, OcrResult::Fields { data } if data.get("curp") == Some(&None)));

        Ok(())
    }
}
