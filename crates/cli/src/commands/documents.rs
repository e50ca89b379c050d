use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Args, Subcommand, builder::PossibleValuesParser};
use siniestros::{
    documents::{DOCUMENT_TYPES, DocumentId, Viewer},
    listing::{filter, paginate},
    routes::{ClaimId, Route},
};
use siniestros_app::{
    context::ClientContext,
    domain::documents::DocumentUpload,
    http::FileAttachment,
};

use crate::{
    commands::{guard, listing::ListingArgs, output_error},
    views::documents::{write_documents_page, write_ocr, write_viewer},
};

#[derive(Debug, Args)]
pub(crate) struct DocumentsCommand {
    #[command(subcommand)]
    command: DocumentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum DocumentsSubcommand {
    /// List documents
    List(ListDocumentsArgs),

    /// Attach a file to a claim
    Upload(UploadArgs),

    /// Extract text from a stored document
    Ocr(DocumentArgs),

    /// Extract text from a local file without storing it
    OcrFile(FileArgs),

    /// Mark a document as validated
    Validate(DocumentArgs),

    /// Show how a document is displayed and optionally save its contents
    View(ViewArgs),
}

#[derive(Debug, Args)]
struct ListDocumentsArgs {
    /// Only documents of this claim
    #[arg(long)]
    claim: Option<ClaimId>,

    #[command(flatten)]
    listing: ListingArgs,
}

#[derive(Debug, Args)]
struct UploadArgs {
    /// Claim number
    claim: ClaimId,

    /// File to upload
    file: PathBuf,

    /// Document type
    #[arg(long = "type", value_parser = PossibleValuesParser::new(DOCUMENT_TYPES))]
    document_type: String,
}

#[derive(Debug, Args)]
struct DocumentArgs {
    /// Document number
    id: DocumentId,
}

#[derive(Debug, Args)]
struct FileArgs {
    /// File to read
    file: PathBuf,
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Document number
    id: DocumentId,

    /// Save the document contents to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub(crate) async fn run(
    command: DocumentsCommand,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        DocumentsSubcommand::List(args) => list(args, context, out).await,
        DocumentsSubcommand::Upload(args) => upload(args, context, out).await,
        DocumentsSubcommand::Ocr(args) => ocr(args, context, out).await,
        DocumentsSubcommand::OcrFile(args) => ocr_file(args, context, out).await,
        DocumentsSubcommand::Validate(args) => validate(args, context, out).await,
        DocumentsSubcommand::View(args) => view(args, context, out).await,
    }
}

async fn read_attachment(path: &Path) -> Result<FileAttachment, String> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("{} has no usable file name", path.display()))?
        .to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    Ok(FileAttachment::new(name, bytes))
}

async fn list(
    args: ListDocumentsArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let route = args.claim.map_or(Route::Documents, Route::ClaimDetail);
    guard::enter(context, route).await?;

    let request = args.listing.request()?;

    let documents = match args.claim {
        Some(claim) => context.documents.list_claim_documents(claim).await,
        None => context.documents.list_documents().await,
    }
    .map_err(|error| format!("failed to load documents: {error}"))?;

    let page = paginate(filter(&documents, &args.listing.search), request);

    write_documents_page(out, &page, &args.listing.search).map_err(output_error)
}

async fn upload(args: UploadArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::ClaimDetail(args.claim)).await?;

    let file = read_attachment(&args.file).await?;

    let document = context
        .documents
        .upload_document(
            args.claim,
            DocumentUpload {
                document_type: args.document_type,
                file,
            },
        )
        .await
        .map_err(|error| format!("failed to upload {}: {error}", args.file.display()))?;

    writeln!(
        out,
        "Uploaded {} as document #{} of claim #{}.",
        document.name, document.id, document.siniestro_id
    )
    .map_err(output_error)
}

async fn ocr(args: DocumentArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::Documents).await?;

    let result = context
        .documents
        .run_ocr(args.id)
        .await
        .map_err(|error| format!("OCR failed for document #{}: {error}", args.id))?;

    write_ocr(out, &result).map_err(output_error)
}

async fn ocr_file(args: FileArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::Documents).await?;

    let file = read_attachment(&args.file).await?;

    let result = context
        .documents
        .run_ocr_on_file(file)
        .await
        .map_err(|error| format!("OCR failed for {}: {error}", args.file.display()))?;

    write_ocr(out, &result).map_err(output_error)
}

async fn validate(
    args: DocumentArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    guard::enter(context, Route::Documents).await?;

    let document = context
        .documents
        .validate_document(args.id)
        .await
        .map_err(|error| format!("failed to validate document #{}: {error}", args.id))?;

    writeln!(out, "Document #{} ({}) validated.", document.id, document.name).map_err(output_error)
}

async fn view(args: ViewArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::Documents).await?;

    let documents = context
        .documents
        .list_documents()
        .await
        .map_err(|error| format!("failed to load documents: {error}"))?;

    let viewer = documents
        .iter()
        .find(|document| document.id == args.id)
        .map_or(Viewer::Empty, Viewer::for_document);

    write_viewer(out, &viewer).map_err(output_error)?;

    let Some(path) = args.output else {
        return Ok(());
    };

    if viewer == Viewer::Empty {
        return Err(format!("document #{} not found", args.id));
    }

    let bytes = context
        .documents
        .download_document(args.id)
        .await
        .map_err(|error| format!("failed to download document #{}: {error}", args.id))?;

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|error| format!("failed to write {}: {error}", path.display()))?;

    writeln!(out, "Saved {} bytes to {}.", bytes.len(), path.display()).map_err(output_error)
}
