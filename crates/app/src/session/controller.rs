//! Session controller.
//!
//! Owns the authoritative [`Session`] snapshot and the persisted credential, and keeps
//! the two in step. Operations that change the session are serialised: a logout issued
//! while a login is in flight runs once the login has settled, so the last request wins.

use std::sync::Arc;

use siniestros::{
    session::{AccessToken, Session},
    users::{Registration, User, UserKind},
};
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, warn};

use crate::{
    http::ApiClient,
    session::{
        ACCESS_TOKEN_PATH, AUTHENTICATION_FAILED, LOGIN_FAILED, PersistedSession,
        REGISTER_AGENT_PATH, REGISTER_USER_PATH, REGISTRATION_FAILED, SessionError, SessionStore,
        TokenGrant, identity_path,
    },
};

pub struct SessionController {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
    state: watch::Sender<Session>,
    operation: Mutex<()>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Controller in the [`Unknown`](siniestros::session::AuthState::Unknown) state.
    #[must_use]
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        let (state, _receiver) = watch::channel(Session::unknown());

        Self {
            api,
            store,
            state,
            operation: Mutex::new(()),
        }
    }

    /// Current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified on every session change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn publish(&self, session: Session) {
        debug!(state = ?session.state(), "session changed");

        self.state.send_replace(session);
    }

    /// Restore a persisted session, verifying the token with the server.
    ///
    /// Without a stored token no request is made. A token the server rejects is
    /// discarded; one that cannot be checked because the server is unreachable is kept
    /// for the next attempt. Either way the session ends up anonymous with the failure
    /// recorded.
    pub async fn bootstrap(&self) -> Session {
        let _operation = self.operation.lock().await;

        let persisted = match self.store.load() {
            Ok(Some(persisted)) => persisted,
            Ok(None) => {
                debug!("no stored session");

                self.publish(Session::anonymous());

                return self.snapshot();
            }
            Err(source) => {
                warn!("discarding unreadable stored session: {source}");

                self.discard_persisted();
                self.publish(Session::failed(AUTHENTICATION_FAILED));

                return self.snapshot();
            }
        };

        self.publish(Session::checking());

        match self.fetch_identity(persisted.user_kind).await {
            Ok(user) => {
                info!(user = user.id, kind = %persisted.user_kind, "session restored");

                self.publish(Session::authenticated(
                    persisted.token,
                    user,
                    persisted.user_kind,
                ));
            }
            Err(SessionError::Api(source)) if source.is_rejection() => {
                warn!("stored token rejected: {source}");

                self.discard_persisted();
                self.publish(Session::failed(source.display_message(AUTHENTICATION_FAILED)));
            }
            Err(source) => {
                warn!("could not verify stored token: {source}");

                self.publish(Session::failed(source.display_message(AUTHENTICATION_FAILED)));
            }
        }

        self.snapshot()
    }

    /// Exchange credentials for a token and load the matching identity.
    ///
    /// On success the token is persisted and the session becomes authenticated. On any
    /// failure the persisted token is removed and the session becomes anonymous with the
    /// server's explanation recorded.
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are refused, the server cannot be reached
    /// or the token cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserKind, SessionError> {
        let _operation = self.operation.lock().await;

        self.publish(Session::checking());

        match self.authenticate(email, password).await {
            Ok((token, user, kind)) => {
                info!(user = user.id, %kind, "logged in");

                self.publish(Session::authenticated(token, user, kind));

                Ok(kind)
            }
            Err(source) => {
                warn!("login failed: {source}");

                self.discard_persisted();
                self.publish(Session::failed(source.display_message(LOGIN_FAILED)));

                Err(source)
            }
        }
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(AccessToken, User, UserKind), SessionError> {
        let grant: TokenGrant = self
            .api
            .post_form(
                ACCESS_TOKEN_PATH,
                &[("username", email), ("password", password)],
            )
            .await?;

        debug!(
            token_type = grant.token_type.as_deref().unwrap_or("bearer"),
            kind = %grant.user_type,
            "token issued"
        );

        let token = AccessToken::new(grant.access_token);

        self.store.save(&PersistedSession {
            token: token.clone(),
            user_kind: grant.user_type,
        })?;

        let user = self.fetch_identity(grant.user_type).await?;

        Ok((token, user, grant.user_type))
    }

    async fn fetch_identity(&self, kind: UserKind) -> Result<User, SessionError> {
        Ok(self.api.post_empty(identity_path(kind)).await?)
    }

    /// Create an account. Nobody is logged in by this; the new user logs in separately.
    ///
    /// A visitor's session shows the request as in flight and records a refusal in
    /// `last_error`. An authenticated session is left as it is.
    ///
    /// # Errors
    ///
    /// Returns an error when the server refuses the registration or cannot be reached.
    pub async fn register(&self, registration: &Registration) -> Result<User, SessionError> {
        let _operation = self.operation.lock().await;

        let track = !self.snapshot().is_authenticated();

        if track {
            self.publish(Session::checking());
        }

        let path = if registration.is_agent {
            REGISTER_AGENT_PATH
        } else {
            REGISTER_USER_PATH
        };

        match self.api.post_json::<_, User>(path, registration).await {
            Ok(user) => {
                info!(user = user.id, agent = registration.is_agent, "account registered");

                if track {
                    self.publish(Session::anonymous());
                }

                Ok(user)
            }
            Err(source) => {
                warn!("registration failed: {source}");

                let source = SessionError::from(source);

                if track {
                    self.publish(Session::failed(source.display_message(REGISTRATION_FAILED)));
                }

                Err(source)
            }
        }
    }

    /// Forget the persisted token and become anonymous. Safe to call repeatedly.
    ///
    /// The in-memory session is reset even when the store cannot be cleared.
    ///
    /// # Errors
    ///
    /// Returns an error when the persisted token could not be removed.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _operation = self.operation.lock().await;

        let cleared = self.store.clear();

        self.publish(Session::anonymous());

        match cleared {
            Ok(()) => {
                info!("logged out");

                Ok(())
            }
            Err(source) => {
                error!("failed to clear stored session: {source}");

                Err(source.into())
            }
        }
    }

    fn discard_persisted(&self) {
        if let Err(source) = self.store.clear() {
            error!("failed to clear stored session: {source}");
        }
    }
}
