//! Users

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::validation::{ValidationError, require};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Kind of account behind a session.
///
/// The API server tags regular accounts as `"user"` and agents as `"agent"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    /// Insured party managing their own claims.
    #[serde(rename = "user")]
    Regular,

    /// Privileged account with access to management views.
    Agent,
}

impl UserKind {
    /// Wire tag used by the API server and the persisted session.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "user",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised user kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user kind `{0}`")]
pub struct UnknownUserKind(pub String);

impl FromStr for UserKind {
    type Err = UnknownUserKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::Regular),
            "agent" => Ok(Self::Agent),
            other => Err(UnknownUserKind(other.to_string())),
        }
    }
}

/// Identity returned by the token verification endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-side identifier.
    pub id: i64,

    /// Login email. The server allows accounts without one.
    #[serde(default)]
    pub email: Option<String>,

    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,

    /// Role flag as reported by the server.
    #[serde(default)]
    pub is_agent: bool,

    /// Whether the account is enabled.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Users assigned to an agent. Always empty for regular users.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assigned_users: Vec<i64>,
}

const fn default_active() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Name to show in headers: the full name when set, otherwise the email, otherwise
    /// the account number.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.full_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .map_or_else(|| format!("#{}", self.id), str::to_string)
    }
}

/// Registration form as filled in by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    /// Login email.
    pub email: String,

    /// Display name.
    pub full_name: String,

    /// Chosen password.
    pub password: String,

    /// Password typed a second time.
    pub confirm_password: String,

    /// Register as an agent rather than a regular user.
    pub is_agent: bool,
}

impl RegistrationForm {
    /// Validate the form and produce the payload sent to the server.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a field is blank, the passwords differ or the
    /// password is too short.
    pub fn validate(self) -> Result<Registration, ValidationError> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("full name", &self.full_name)?;

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }

        Ok(Registration {
            email: self.email.trim().to_string(),
            password: self.password,
            full_name: self.full_name.trim().to_string(),
            is_agent: self.is_agent,
        })
    }
}

/// Registration payload.
#[derive(Clone, Serialize)]
pub struct Registration {
    /// Login email.
    pub email: String,

    /// Chosen password.
    pub password: String,

    /// Display name.
    pub full_name: String,

    /// Selects the agent registration endpoint.
    pub is_agent: bool,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("full_name", &self.full_name)
            .field("is_agent", &self.is_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            email: "ana@example.com".to_string(),
            full_name: "Ana Pérez".to_string(),
            password: "secreto123".to_string(),
            confirm_password: "secreto123".to_string(),
            is_agent: false,
        }
    }

    #[test]
    fn user_kind_uses_server_tags() -> TestResult {
        assert_eq!(serde_json::to_string(&UserKind::Regular)?, "\"user\"");
        assert_eq!(serde_json::to_string(&UserKind::Agent)?, "\"agent\"");
        assert_eq!(serde_json::from_str::<UserKind>("\"agent\"")?, UserKind::Agent);
        assert_eq!("user".parse::<UserKind>()?, UserKind::Regular);

        Ok(())
    }

    #[test]
    fn unknown_user_kind_is_rejected() {
        assert_eq!(
            "admin".parse::<UserKind>(),
            Err(UnknownUserKind("admin".to_string()))
        );
    }

    #[test]
    fn agent_identity_deserializes_assigned_users() -> TestResult {
        let user: User = serde_json::from_str(
            r#"{"id":7,"email":"agente@example.com","full_name":null,"is_agent":true,"is_active":true,"assigned_users":[1,2]}"#,
        )?;

        assert!(user.is_agent);
        assert_eq!(user.assigned_users, vec![1, 2]);
        assert_eq!(user.display_name(), "agente@example.com");

        Ok(())
    }

    #[test]
    fn identity_without_email_or_assignments_still_decodes() -> TestResult {
        let user: User = serde_json::from_str(
            r#"{"id":9,"email":null,"full_name":" ","is_agent":false,"is_active":true,"assigned_users":null}"#,
        )?;

        assert_eq!(user.email, None);
        assert!(user.assigned_users.is_empty());
        assert_eq!(user.display_name(), "#9");

        Ok(())
    }

    #[test]
    fn valid_form_produces_trimmed_registration() -> TestResult {
        let registration = RegistrationForm {
            email: "  ana@example.com ".to_string(),
            ..form()
        }
        .validate()?;

        assert_eq!(registration.email, "ana@example.com");
        assert!(!registration.is_agent);

        Ok(())
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let result = RegistrationForm {
            confirm_password: "otra-cosa".to_string(),
            ..form()
        }
        .validate();

        assert!(matches!(result, Err(ValidationError::PasswordMismatch)));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let result = RegistrationForm {
            password: "corta".to_string(),
            confirm_password: "corta".to_string(),
            ..form()
        }
        .validate();

        assert!(matches!(
            result,
            Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH))
        ));
    }

    #[test]
    fn registration_debug_hides_password() -> TestResult {
        let registration = form().validate()?;

        assert!(!format!("{registration:?}").contains("secreto123"));

        Ok(())
    }
}
