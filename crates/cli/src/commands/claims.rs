use std::io::Write;

use clap::{Args, Subcommand, builder::PossibleValuesParser};
use siniestros::{
    claims::{CLAIM_TYPES, ClaimPriority, ClaimStatus, ClaimUpdate, NewClaim},
    listing::{filter, paginate},
    routes::{ClaimId, Route},
};
use siniestros_app::context::ClientContext;

use crate::{
    commands::{guard, listing::ListingArgs, output_error},
    views::claims::{write_claim_detail, write_claims_page},
};

static STATUSES: [ClaimStatus; 4] = ClaimStatus::ALL;
static PRIORITIES: [ClaimPriority; 3] = ClaimPriority::ALL;

fn status_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(STATUSES.iter().map(ClaimStatus::as_str))
}

fn priority_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(PRIORITIES.iter().map(ClaimPriority::as_str))
}

#[derive(Debug, Args)]
pub(crate) struct ClaimsCommand {
    #[command(subcommand)]
    command: ClaimsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ClaimsSubcommand {
    /// List claims
    List(ListingArgs),

    /// Show a claim and its documents
    Show(ClaimArgs),

    /// Report a new claim
    Create(CreateClaimArgs),

    /// Change fields of a claim
    Update(UpdateClaimArgs),

    /// Delete a claim
    Delete(ClaimArgs),
}

#[derive(Debug, Args)]
struct ClaimArgs {
    /// Claim number
    id: ClaimId,
}

#[derive(Debug, Args)]
struct CreateClaimArgs {
    /// Policy number
    #[arg(long)]
    policy: String,

    /// Insured party
    #[arg(long)]
    insured: String,

    /// Claim type
    #[arg(long = "type", value_parser = PossibleValuesParser::new(CLAIM_TYPES))]
    claim_type: String,

    /// What happened
    #[arg(long)]
    description: String,

    /// Initial status
    #[arg(long, value_parser = status_parser())]
    status: Option<String>,

    /// Initial priority
    #[arg(long, value_parser = priority_parser())]
    priority: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateClaimArgs {
    /// Claim number
    id: ClaimId,

    /// New policy number
    #[arg(long)]
    policy: Option<String>,

    /// New insured party
    #[arg(long)]
    insured: Option<String>,

    /// New claim type
    #[arg(long = "type", value_parser = PossibleValuesParser::new(CLAIM_TYPES))]
    claim_type: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New status
    #[arg(long, value_parser = status_parser())]
    status: Option<String>,

    /// New priority
    #[arg(long, value_parser = priority_parser())]
    priority: Option<String>,
}

pub(crate) async fn run(
    command: ClaimsCommand,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        ClaimsSubcommand::List(args) => list(args, context, out).await,
        ClaimsSubcommand::Show(args) => show(args, context, out).await,
        ClaimsSubcommand::Create(args) => create(args, context, out).await,
        ClaimsSubcommand::Update(args) => update(args, context, out).await,
        ClaimsSubcommand::Delete(args) => delete(args, context, out).await,
    }
}

async fn list(args: ListingArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::Claims).await?;

    let request = args.request()?;

    let claims = context
        .claims
        .list_claims()
        .await
        .map_err(|error| format!("failed to load claims: {error}"))?;

    let page = paginate(filter(&claims, &args.search), request);

    write_claims_page(out, &page, &args.search).map_err(output_error)
}

async fn show(args: ClaimArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::ClaimDetail(args.id)).await?;

    let claim = context
        .claims
        .get_claim(args.id)
        .await
        .map_err(|error| format!("failed to load claim #{}: {error}", args.id))?;

    let documents = context
        .documents
        .list_claim_documents(args.id)
        .await
        .map_err(|error| format!("failed to load documents of claim #{}: {error}", args.id))?;

    write_claim_detail(out, &claim, &documents).map_err(output_error)
}

async fn create(
    args: CreateClaimArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    guard::enter(context, Route::NewClaim).await?;

    let claim = NewClaim {
        policy_number: args.policy,
        insured: args.insured,
        claim_type: args.claim_type,
        description: args.description,
        status: args.status.as_deref().map(ClaimStatus::from).unwrap_or_default(),
        priority: args
            .priority
            .as_deref()
            .map(ClaimPriority::from)
            .unwrap_or_default(),
    };

    let created = context
        .claims
        .create_claim(claim)
        .await
        .map_err(|error| format!("failed to create claim: {error}"))?;

    writeln!(out, "Claim #{} created.", created.id).map_err(output_error)?;

    write_claim_detail(out, &created, &[]).map_err(output_error)
}

async fn update(
    args: UpdateClaimArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    guard::enter(context, Route::ClaimDetail(args.id)).await?;

    let update = ClaimUpdate {
        policy_number: args.policy,
        insured: args.insured,
        claim_type: args.claim_type,
        description: args.description,
        status: args.status.as_deref().map(ClaimStatus::from),
        priority: args.priority.as_deref().map(ClaimPriority::from),
    };

    let updated = context
        .claims
        .update_claim(args.id, update)
        .await
        .map_err(|error| format!("failed to update claim #{}: {error}", args.id))?;

    write_claim_detail(out, &updated, &[]).map_err(output_error)
}

async fn delete(args: ClaimArgs, context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::ClaimDetail(args.id)).await?;

    let deleted = context
        .claims
        .delete_claim(args.id)
        .await
        .map_err(|error| format!("failed to delete claim #{}: {error}", args.id))?;

    writeln!(out, "Claim #{} ({}) deleted.", deleted.id, deleted.policy_number).map_err(output_error)
}
