//! Siniestros command-line client

use std::{io, process, sync::Arc};

use siniestros_app::{context::ClientContext, session::SessionStore};

use crate::config::CliConfig;

mod commands;
mod config;
mod observability;
mod views;

/// Siniestros client entry point
#[tokio::main]
pub async fn main() {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = run(config).await {
        report(&error);

        process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "command failures are reported to the terminal, not the log"
)]
fn report(error: &str) {
    eprintln!("{error}");
}

async fn run(config: CliConfig) -> Result<(), String> {
    observability::init(&config.logging).map_err(|error| error.to_string())?;

    let store: Arc<dyn SessionStore> = Arc::new(config.session.store());

    let context = ClientContext::connect(&config.api.to_config(), store)
        .map_err(|error| format!("failed to start client: {error}"))?;

    let mut out = io::stdout().lock();

    commands::run(config.command, &context, &mut out).await
}
