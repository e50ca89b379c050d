//! Route guards for commands.

use siniestros::{
    guards::{GuardDecision, check},
    routes::Route,
    session::Session,
    users::{User, UserKind},
};
use siniestros_app::context::ClientContext;

/// Evaluate the guard of `route`, restoring the persisted session first when the
/// guard cannot decide yet.
pub(crate) async fn enter(context: &ClientContext, route: Route) -> Result<Session, String> {
    let mut session = context.session.snapshot();
    let mut decision = check(&session, route);

    if decision == GuardDecision::Defer {
        session = context.session.bootstrap().await;
        decision = check(&session, route);
    }

    match decision {
        GuardDecision::Allow => Ok(session),
        GuardDecision::Redirect(Route::Login) => Err(match session.last_error() {
            Some(reason) => format!("{route} requires a session ({reason}); run `siniestros login`"),
            None => format!("{route} requires a session; run `siniestros login`"),
        }),
        GuardDecision::Redirect(Route::Unauthorized) => {
            Err(format!("{route} is restricted to agents"))
        }
        GuardDecision::Redirect(target) => Err(format!(
            "already logged in; continue at {target} or run `siniestros logout` first"
        )),
        GuardDecision::Defer => Err("session state could not be determined".to_string()),
    }
}

/// Identity behind an authenticated session.
pub(crate) fn signed_in(session: &Session) -> Result<(&User, UserKind), String> {
    session
        .current_user()
        .zip(session.user_kind())
        .ok_or_else(|| "no signed-in user".to_string())
}
