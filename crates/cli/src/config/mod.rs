//! Client configuration module

use clap::Parser;

use crate::{
    commands::Commands,
    config::{api::ApiArgs, observability::LoggingConfig, session::SessionConfig},
};

pub(crate) mod api;
pub(crate) mod observability;
pub(crate) mod session;

pub(crate) use observability::LogFormat;

/// Siniestros command-line client configuration
#[derive(Debug, Parser)]
#[command(name = "siniestros", about = "Insurance claims portal client", long_about = None)]
pub(crate) struct CliConfig {
    /// Claims API connection settings.
    #[command(flatten)]
    pub api: ApiArgs,

    /// Session persistence settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_point_at_local_server() -> TestResult {
        let config = CliConfig::try_parse_from(["siniestros", "health"])?;
        let api = config.api.to_config();

        assert_eq!(api.base_url, "http://localhost:8000");
        assert_eq!(api.timeout, None);

        Ok(())
    }

    #[test]
    fn timeout_and_url_are_configurable() -> TestResult {
        let config = CliConfig::try_parse_from([
            "siniestros",
            "--api-url",
            "https://claims.example.com/",
            "--request-timeout-seconds",
            "15",
            "--log-format",
            "json",
            "whoami",
        ])?;
        let api = config.api.to_config();

        assert_eq!(api.base_url, "https://claims.example.com/");
        assert_eq!(api.timeout, Some(Duration::from_secs(15)));
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(matches!(config.command, Commands::Whoami));

        Ok(())
    }

    #[test]
    fn explicit_session_file_is_used() -> TestResult {
        let config = CliConfig::try_parse_from([
            "siniestros",
            "--session-file",
            "/tmp/siniestros-test/session.json",
            "logout",
        ])?;

        assert_eq!(
            config.session.store().path(),
            std::path::Path::new("/tmp/siniestros-test/session.json")
        );

        Ok(())
    }
}
