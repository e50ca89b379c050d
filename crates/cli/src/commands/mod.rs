//! Command tree.
//!
//! Each command evaluates the guard of the route it renders before touching the API.

use std::io::{self, Write};

use clap::Subcommand;
use siniestros_app::context::ClientContext;

mod auth;
mod claims;
mod dashboard;
mod documents;
mod guard;
mod health;
mod listing;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Check that the API server is up
    Health,

    /// Log in and remember the session
    Login(auth::LoginArgs),

    /// Create an account
    Register(auth::RegisterArgs),

    /// Forget the remembered session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Claim counters and recent activity
    Dashboard,

    /// Work with claims
    Claims(claims::ClaimsCommand),

    /// Work with claim documents
    Documents(documents::DocumentsCommand),

    /// Users assigned to the signed-in agent
    Users,
}

pub(crate) async fn run(
    command: Commands,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command {
        Commands::Health => health::run(context, out).await,
        Commands::Login(args) => auth::login(args, context, out).await,
        Commands::Register(args) => auth::register(args, context, out).await,
        Commands::Logout => auth::logout(context, out).await,
        Commands::Whoami => auth::whoami(context, out).await,
        Commands::Dashboard => dashboard::run(context, out).await,
        Commands::Claims(command) => claims::run(command, context, out).await,
        Commands::Documents(command) => documents::run(command, context, out).await,
        Commands::Users => auth::users(context, out).await,
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a map_err adapter"
)]
fn output_error(error: io::Error) -> String {
    format!("failed to write output: {error}")
}
