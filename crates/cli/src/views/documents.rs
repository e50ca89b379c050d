//! Document views.

use std::io::{self, Write};

use siniestros::{
    claims::Tone,
    dates::format_date,
    documents::{Document, DocumentKind, OcrResult, Viewer},
    listing::Page,
};
use tabled::{Table, builder::Builder};

use crate::views::{claims::write_pager, paint, style};

const VALIDATED_COLUMN: usize = 5;

fn kind_label(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Pdf => "PDF",
        DocumentKind::Image => "Imagen",
        DocumentKind::Other => "Archivo",
    }
}

/// Table of documents with the validation flag coloured.
pub(crate) fn documents_table(documents: &[&Document]) -> Table {
    let mut builder = Builder::default();

    builder.push_record(["#", "Nombre", "Tipo", "Formato", "Subido", "Validado", "Siniestro"]);

    for document in documents {
        builder.push_record([
            document.id.to_string(),
            document.name.clone(),
            document.document_type.clone(),
            kind_label(document.kind()).to_string(),
            format_date(document.upload_date),
            if document.validated { "Sí" } else { "Pendiente" }.to_string(),
            format!("#{}", document.siniestro_id),
        ]);
    }

    let mut table = builder.build();
    style(&mut table);

    for (index, document) in documents.iter().enumerate() {
        let tone = if document.validated {
            Tone::Success
        } else {
            Tone::Warning
        };

        paint(&mut table, index + 1, VALIDATED_COLUMN, tone);
    }

    table
}

/// One page of the documents list.
pub(crate) fn write_documents_page(
    out: &mut impl Write,
    page: &Page<&Document>,
    term: &str,
) -> io::Result<()> {
    if page.items.is_empty() {
        return if term.trim().is_empty() {
            writeln!(out, "No documents found.")
        } else {
            writeln!(out, "No documents match \"{}\".", term.trim())
        };
    }

    writeln!(out, "{}", documents_table(&page.items))?;

    write_pager(out, page)
}

/// How a document would be displayed, and where its contents live.
pub(crate) fn write_viewer(out: &mut impl Write, viewer: &Viewer) -> io::Result<()> {
    match viewer {
        Viewer::Frame { url } => writeln!(out, "PDF viewer: {url}"),
        Viewer::Inline { url } => writeln!(out, "Image: {url}"),
        Viewer::Download { url } => {
            writeln!(out, "Preview not available for this file type; download: {url}")
        }
        Viewer::Empty => writeln!(out, "Nothing to display."),
    }
}

/// OCR output, as a field table or as plain text.
pub(crate) fn write_ocr(out: &mut impl Write, result: &OcrResult) -> io::Result<()> {
    match result {
        OcrResult::Text { text } if text.trim().is_empty() => {
            writeln!(out, "No text was recognised.")
        }
        OcrResult::Text { text } => writeln!(out, "{}", text.trim_end()),
        OcrResult::Fields { data } => {
            let mut builder = Builder::default();

            builder.push_record(["Campo", "Valor"]);

            for (field, value) in data {
                builder.push_record([field.as_str(), value.as_deref().unwrap_or("-")]);
            }

            let mut table = builder.build();
            style(&mut table);

            writeln!(out, "{table}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::date;
    use siniestros::listing::{PageRequest, paginate};
    use testresult::TestResult;

    use super::*;

    fn document(id: i64, name: &str, validated: bool) -> Document {
        Document {
            id,
            name: name.to_string(),
            document_type: "Factura".to_string(),
            path: format!("uploads/1/{name}"),
            upload_date: date(2024, 6, 1).at(10, 0, 0, 0),
            validated,
            siniestro_id: 1,
        }
    }

    #[test]
    fn page_shows_format_and_validation() -> TestResult {
        let documents = [document(1, "factura.pdf", true), document(2, "foto.jpg", false)];
        let page = paginate(documents.iter().collect(), PageRequest::default());

        let mut out = Vec::new();
        write_documents_page(&mut out, &page, "")?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("factura.pdf"));
        assert!(output.contains("PDF"));
        assert!(output.contains("Imagen"));
        assert!(output.contains("Pendiente"));
        assert!(output.contains("01/06/2024"));
        assert!(output.contains("Showing 1-2 of 2"));

        Ok(())
    }

    #[test]
    fn viewer_without_source_has_nothing_to_display() -> TestResult {
        let mut out = Vec::new();
        write_viewer(&mut out, &Viewer::Empty)?;

        assert_eq!(String::from_utf8(out)?, "Nothing to display.\n");

        Ok(())
    }

    #[test]
    fn pdf_viewer_prints_fitted_url() -> TestResult {
        let mut out = Vec::new();
        write_viewer(&mut out, &Viewer::for_document(&document(9, "poliza.PDF", false)))?;

        assert_eq!(
            String::from_utf8(out)?,
            "PDF viewer: /api/documents/download/9#view=FitH\n"
        );

        Ok(())
    }

    #[test]
    fn ocr_fields_render_missing_values_as_dash() -> TestResult {
        let data = BTreeMap::from([
            ("curp".to_string(), None),
            ("nombre".to_string(), Some("ANA PEREZ".to_string())),
        ]);

        let mut out = Vec::new();
        write_ocr(&mut out, &OcrResult::Fields { data })?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("ANA PEREZ"));
        assert!(output.contains("curp"));
        assert!(output.contains('-'));

        Ok(())
    }
}
