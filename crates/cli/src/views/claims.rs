//! Claim views.

use std::io::{self, Write};

use siniestros::{
    claims::Claim,
    dates::format_date,
    documents::Document,
    listing::Page,
};
use tabled::{Table, builder::Builder};

use crate::views::{documents::documents_table, paint, style};

const STATUS_COLUMN: usize = 5;
const PRIORITY_COLUMN: usize = 6;

/// Table of claims with status and priority coloured by tone.
pub(crate) fn claims_table(claims: &[&Claim]) -> Table {
    let mut builder = Builder::default();

    builder.push_record([
        "#", "Póliza", "Asegurado", "Tipo", "Fecha", "Estado", "Prioridad",
    ]);

    for claim in claims {
        builder.push_record([
            claim.id.to_string(),
            claim.policy_number.clone(),
            claim.insured.clone(),
            claim.claim_type.clone(),
            format_date(claim.incident_date),
            claim.status.to_string(),
            claim.priority.to_string(),
        ]);
    }

    let mut table = builder.build();
    style(&mut table);

    for (index, claim) in claims.iter().enumerate() {
        paint(&mut table, index + 1, STATUS_COLUMN, claim.status.tone());
        paint(&mut table, index + 1, PRIORITY_COLUMN, claim.priority.tone());
    }

    table
}

/// One page of the claims list.
pub(crate) fn write_claims_page(
    out: &mut impl Write,
    page: &Page<&Claim>,
    term: &str,
) -> io::Result<()> {
    if page.items.is_empty() {
        return if term.trim().is_empty() {
            writeln!(out, "No claims found.")
        } else {
            writeln!(out, "No claims match \"{}\".", term.trim())
        };
    }

    writeln!(out, "{}", claims_table(&page.items))?;

    write_pager(out, page)
}

/// Position within a paginated list.
pub(crate) fn write_pager<T>(out: &mut impl Write, page: &Page<T>) -> io::Result<()> {
    let Some((first, last)) = page.range() else {
        return Ok(());
    };

    writeln!(
        out,
        "Showing {first}-{last} of {} (page {} of {}, {} per page)",
        page.total,
        page.request.index() + 1,
        page.page_count(),
        page.request.rows_per_page()
    )
}

/// A single claim with its documents.
pub(crate) fn write_claim_detail(
    out: &mut impl Write,
    claim: &Claim,
    documents: &[Document],
) -> io::Result<()> {
    let id = format!("#{}", claim.id);
    let incident_date = format_date(claim.incident_date);
    let reported_at = format_date(claim.reported_at);

    let mut builder = Builder::default();

    builder.push_record(["Siniestro", id.as_str()]);
    builder.push_record(["Póliza", claim.policy_number.as_str()]);
    builder.push_record(["Asegurado", claim.insured.as_str()]);
    builder.push_record(["Tipo", claim.claim_type.as_str()]);
    builder.push_record(["Fecha del siniestro", incident_date.as_str()]);
    builder.push_record(["Fecha de reporte", reported_at.as_str()]);
    builder.push_record(["Estado", claim.status.as_str()]);
    builder.push_record(["Prioridad", claim.priority.as_str()]);
    builder.push_record([
        "Descripción",
        claim.description.as_deref().unwrap_or("-"),
    ]);

    let mut table = builder.build();
    style(&mut table);
    paint(&mut table, 6, 1, claim.status.tone());
    paint(&mut table, 7, 1, claim.priority.tone());

    writeln!(out, "{table}")?;

    if documents.is_empty() {
        return writeln!(out, "No documents attached.");
    }

    let documents: Vec<&Document> = documents.iter().collect();

    writeln!(out, "Documents")?;
    writeln!(out, "{}", documents_table(&documents))
}
