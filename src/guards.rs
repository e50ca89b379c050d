//! Route guards
//!
//! Pure decisions over a [`Session`] snapshot. While the session is loading the answer is
//! [`GuardDecision::Defer`]: neither allowed nor denied.

use crate::{
    routes::{Access, Route},
    session::Session,
    users::UserKind,
};

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is still settling; render nothing conclusive.
    Defer,

    /// Navigation may proceed.
    Allow,

    /// Navigation is denied; go here instead.
    Redirect(Route),
}

impl GuardDecision {
    /// `true` only for [`GuardDecision::Allow`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Guard for routes that need a logged-in user, optionally of a given kind.
///
/// Only [`UserKind::Agent`] restricts anything; a regular-user requirement is satisfied by
/// every authenticated session.
#[must_use]
pub fn requires_auth(session: &Session, required: Option<UserKind>) -> GuardDecision {
    if session.is_loading() {
        return GuardDecision::Defer;
    }

    let Some(kind) = session.user_kind() else {
        return GuardDecision::Redirect(Route::Login);
    };

    if required == Some(UserKind::Agent) && kind != UserKind::Agent {
        return GuardDecision::Redirect(Route::Unauthorized);
    }

    GuardDecision::Allow
}

/// Guard for routes only visitors may see, such as the login form.
#[must_use]
pub fn public_only(session: &Session) -> GuardDecision {
    if session.is_loading() {
        return GuardDecision::Defer;
    }

    if session.is_authenticated() {
        return GuardDecision::Redirect(Route::LANDING);
    }

    GuardDecision::Allow
}

/// Evaluate the guard attached to `route`.
#[must_use]
pub fn check(session: &Session, route: Route) -> GuardDecision {
    match route.access() {
        Access::Public => GuardDecision::Allow,
        Access::PublicOnly => public_only(session),
        Access::Authenticated(required) => requires_auth(session, required),
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::authenticated;

    use super::*;

    #[test]
    fn requires_auth_defers_while_loading() {
        assert_eq!(
            requires_auth(&Session::unknown(), None),
            GuardDecision::Defer
        );
        assert_eq!(
            requires_auth(&Session::checking(), Some(UserKind::Agent)),
            GuardDecision::Defer
        );
    }

    #[test]
    fn requires_auth_denies_anonymous() {
        for required in [None, Some(UserKind::Regular), Some(UserKind::Agent)] {
            assert_eq!(
                requires_auth(&Session::anonymous(), required),
                GuardDecision::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn requires_auth_denies_regular_user_on_agent_route() {
        assert_eq!(
            requires_auth(&authenticated(UserKind::Regular), Some(UserKind::Agent)),
            GuardDecision::Redirect(Route::Unauthorized)
        );
    }

    #[test]
    fn requires_auth_allows_agent_on_agent_route() {
        assert_eq!(
            requires_auth(&authenticated(UserKind::Agent), Some(UserKind::Agent)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn requires_auth_allows_any_authenticated_user_without_role() {
        assert!(requires_auth(&authenticated(UserKind::Regular), None).is_allowed());
        assert!(requires_auth(&authenticated(UserKind::Agent), None).is_allowed());
    }

    #[test]
    fn public_only_redirects_authenticated_users_to_landing() {
        for kind in [UserKind::Regular, UserKind::Agent] {
            for route in [Route::Login, Route::Register] {
                assert_eq!(
                    check(&authenticated(kind), route),
                    GuardDecision::Redirect(Route::Dashboard)
                );
            }
        }
    }

    #[test]
    fn public_only_defers_while_loading_and_allows_visitors() {
        assert_eq!(public_only(&Session::checking()), GuardDecision::Defer);
        assert_eq!(public_only(&Session::anonymous()), GuardDecision::Allow);
        assert_eq!(public_only(&Session::failed("x")), GuardDecision::Allow);
    }

    #[test]
    fn public_routes_are_always_allowed() {
        assert_eq!(check(&Session::unknown(), Route::Home), GuardDecision::Allow);
        assert_eq!(
            check(&Session::anonymous(), Route::Unauthorized),
            GuardDecision::Allow
        );
    }
}
