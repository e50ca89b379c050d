//! Navigation targets

use std::fmt;

use crate::users::UserKind;

/// Claim identifier as assigned by the API server.
pub type ClaimId = i64;

/// Named navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,

    /// Login form.
    Login,

    /// Registration form.
    Register,

    /// Shown when a role check fails.
    Unauthorized,

    /// Default page after login.
    Dashboard,

    /// Claims list.
    Claims,

    /// New claim form.
    NewClaim,

    /// Single claim with its documents.
    ClaimDetail(ClaimId),

    /// Documents list.
    Documents,

    /// User management, agents only.
    Users,

    /// Own profile.
    Profile,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, authenticated or not.
    Public,

    /// Only visitors who are not logged in.
    PublicOnly,

    /// Any authenticated user, optionally restricted to a kind.
    Authenticated(Option<UserKind>),
}

impl Route {
    /// Where a logged-in user lands by default.
    pub const LANDING: Self = Self::Dashboard;

    /// URL path of the route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Unauthorized => "/unauthorized".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Claims => "/siniestros".to_string(),
            Self::NewClaim => "/siniestros/nuevo".to_string(),
            Self::ClaimDetail(id) => format!("/siniestros/{id}"),
            Self::Documents => "/documentos".to_string(),
            Self::Users => "/usuarios".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// Access rule guarding the route.
    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Home | Self::Unauthorized => Access::Public,
            Self::Login | Self::Register => Access::PublicOnly,
            Self::Users => Access::Authenticated(Some(UserKind::Agent)),
            Self::Dashboard
            | Self::Claims
            | Self::NewClaim
            | Self::ClaimDetail(_)
            | Self::Documents
            | Self::Profile => Access::Authenticated(None),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_detail_path_includes_id() {
        assert_eq!(Route::ClaimDetail(42).path(), "/siniestros/42");
    }

    #[test]
    fn users_route_requires_agent() {
        assert_eq!(
            Route::Users.access(),
            Access::Authenticated(Some(UserKind::Agent))
        );
    }

    #[test]
    fn login_and_register_are_public_only() {
        assert_eq!(Route::Login.access(), Access::PublicOnly);
        assert_eq!(Route::Register.access(), Access::PublicOnly);
    }
}
