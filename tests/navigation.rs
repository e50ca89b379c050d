//! Route guards across the lifetime of a session.

use siniestros::{
    guards::{GuardDecision, check},
    routes::Route,
    session::{AccessToken, Session},
    users::{User, UserKind},
};

const PROTECTED: [Route; 6] = [
    Route::Dashboard,
    Route::Claims,
    Route::NewClaim,
    Route::ClaimDetail(7),
    Route::Documents,
    Route::Profile,
];

fn signed_in(kind: UserKind) -> Session {
    let user = User {
        id: 3,
        email: Some("agente@example.com".to_string()),
        full_name: Some("Laura Méndez".to_string()),
        is_agent: kind == UserKind::Agent,
        is_active: true,
        assigned_users: vec![5],
    };

    Session::authenticated(AccessToken::new("tok"), user, kind)
}

#[test]
fn nothing_is_decided_before_the_session_settles() {
    for session in [Session::unknown(), Session::checking()] {
        for route in PROTECTED.into_iter().chain([Route::Users, Route::Login, Route::Register]) {
            assert_eq!(
                check(&session, route),
                GuardDecision::Defer,
                "{route} should wait for the session"
            );
        }

        assert_eq!(check(&session, Route::Home), GuardDecision::Allow);
    }
}

#[test]
fn visitors_are_sent_to_login() {
    for session in [Session::anonymous(), Session::failed("Token expired")] {
        for route in PROTECTED.into_iter().chain([Route::Users]) {
            assert_eq!(
                check(&session, route),
                GuardDecision::Redirect(Route::Login),
                "{route} should need a session"
            );
        }

        assert!(check(&session, Route::Login).is_allowed());
        assert!(check(&session, Route::Register).is_allowed());
    }
}

#[test]
fn regular_users_reach_everything_but_user_management() {
    let session = signed_in(UserKind::Regular);

    for route in PROTECTED {
        assert!(check(&session, route).is_allowed(), "{route} should be open");
    }

    assert_eq!(
        check(&session, Route::Users),
        GuardDecision::Redirect(Route::Unauthorized)
    );
    assert!(check(&session, Route::Unauthorized).is_allowed());
}

#[test]
fn agents_reach_user_management() {
    let session = signed_in(UserKind::Agent);

    assert!(check(&session, Route::Users).is_allowed());
    assert!(session.is_agent());
}

#[test]
fn signed_in_users_skip_the_login_form() {
    for kind in [UserKind::Regular, UserKind::Agent] {
        let session = signed_in(kind);

        assert_eq!(
            check(&session, Route::Login),
            GuardDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            check(&session, Route::Register),
            GuardDecision::Redirect(Route::Dashboard)
        );
    }
}
