//! Authentication endpoints and payloads.

use serde::Deserialize;
use siniestros::users::UserKind;

/// Exchanges email and password for a bearer token.
pub const ACCESS_TOKEN_PATH: &str = "/api/login/access-token";

/// Returns the regular user owning the bearer token.
pub const TEST_TOKEN_PATH: &str = "/api/login/test-token";

/// Returns the agent owning the bearer token.
pub const TEST_AGENT_TOKEN_PATH: &str = "/api/login/test-agent-token";

/// Open registration for regular users.
pub const REGISTER_USER_PATH: &str = "/api/users/open";

/// Open registration for agents.
pub const REGISTER_AGENT_PATH: &str = "/api/users/open_agent";

/// Message shown when login fails without a server explanation.
pub const LOGIN_FAILED: &str = "Error al iniciar sesión";

/// Message shown when a stored session cannot be verified.
pub const AUTHENTICATION_FAILED: &str = "Error de autenticación";

/// Message shown when registration fails without a server explanation.
pub const REGISTRATION_FAILED: &str = "Error al registrar usuario";

/// Identity endpoint that accepts tokens issued to `kind`.
#[must_use]
pub const fn identity_path(kind: UserKind) -> &'static str {
    match kind {
        UserKind::Regular => TEST_TOKEN_PATH,
        UserKind::Agent => TEST_AGENT_TOKEN_PATH,
    }
}

/// Successful login response.
#[derive(Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    pub user_type: UserKind,
}
