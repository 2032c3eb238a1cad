//! Auth state machine
//!
//! States: anonymous → authenticating → authenticated → (expired |
//! logged_out) → anonymous. Token validity is discovered reactively: there
//! is no refresh or expiry timer, only the 401 path into `Expired`.

use devfolio_types::Session;
use tracing::{debug, info};

use crate::store::{Result, SessionStore};

/// Where the client currently stands with the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No token held; protected screens redirect to authentication
    Anonymous,
    /// Auth request in flight; resubmission is refused
    Authenticating,
    /// Token held and assumed valid until the API rejects it
    Authenticated,
    /// A 401 arrived; store is cleared, message pending acknowledgement
    Expired,
    /// Explicit logout; store is cleared, message pending acknowledgement
    LoggedOut,
}

/// The auth lifecycle, persisting through an injected [`SessionStore`]
pub struct AuthFlow<S: SessionStore> {
    state: AuthState,
    session: Option<Session>,
    store: S,
}

impl<S: SessionStore> AuthFlow<S> {
    /// Start from whatever the store holds: a stored token resumes an
    /// authenticated session, otherwise the flow is anonymous.
    pub fn resume(store: S) -> Result<Self> {
        let session = store.get_session()?;
        let state = if session.is_some() {
            info!("Resumed session from store");
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        };

        Ok(Self {
            state,
            session,
            store,
        })
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Bearer token for authenticated calls
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Enter `authenticating` from `anonymous`
    ///
    /// Returns false when a request is already in flight or the flow is not
    /// anonymous; callers use this as the resubmission guard.
    pub fn begin(&mut self) -> bool {
        if self.state == AuthState::Anonymous {
            self.state = AuthState::Authenticating;
            true
        } else {
            debug!("begin() refused in state {:?}", self.state);
            false
        }
    }

    /// Auth request succeeded: persist the session and become authenticated
    pub fn complete(&mut self, session: Session) -> Result<()> {
        self.store.set_session(&session)?;
        self.session = Some(session);
        self.state = AuthState::Authenticated;
        info!("Authenticated");
        Ok(())
    }

    /// Auth request failed: back to anonymous, nothing was persisted
    pub fn fail(&mut self) {
        self.state = AuthState::Anonymous;
    }

    /// A 401 arrived on an authenticated call: tear the session down
    pub fn expire(&mut self) -> Result<()> {
        self.store.clear_session()?;
        self.session = None;
        self.state = AuthState::Expired;
        info!("Session rejected by the API, cleared");
        Ok(())
    }

    /// Explicit logout: immediate clear
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear_session()?;
        self.session = None;
        self.state = AuthState::LoggedOut;
        info!("Logged out");
        Ok(())
    }

    /// Leave `expired`/`logged_out` once the message has been surfaced
    pub fn acknowledge(&mut self) {
        if matches!(self.state, AuthState::Expired | AuthState::LoggedOut) {
            self.state = AuthState::Anonymous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;
    use devfolio_types::AuthUser;

    fn session() -> Session {
        Session::new(
            "opaque-token",
            Some(AuthUser::new("ada@example.com", None)),
        )
    }

    fn anonymous_flow() -> AuthFlow<MemorySessionStore> {
        AuthFlow::resume(MemorySessionStore::new()).unwrap()
    }

    #[test]
    fn test_resume_without_stored_session_is_anonymous() {
        let flow = anonymous_flow();
        assert_eq!(flow.state(), AuthState::Anonymous);
        assert!(flow.token().is_none());
    }

    #[test]
    fn test_resume_with_stored_session_is_authenticated() {
        let store = MemorySessionStore::new();
        store.set_session(&session()).unwrap();

        let flow = AuthFlow::resume(store).unwrap();
        assert_eq!(flow.state(), AuthState::Authenticated);
        assert_eq!(flow.token(), Some("opaque-token"));
    }

    #[test]
    fn test_login_happy_path() {
        let mut flow = anonymous_flow();

        assert!(flow.begin());
        assert_eq!(flow.state(), AuthState::Authenticating);
        // Resubmission guard: a second begin is refused mid-flight
        assert!(!flow.begin());

        flow.complete(session()).unwrap();
        assert!(flow.is_authenticated());
        assert_eq!(flow.session().unwrap().email(), Some("ada@example.com"));
    }

    #[test]
    fn test_complete_persists_through_the_store() {
        let mut flow = anonymous_flow();
        flow.begin();
        flow.complete(session()).unwrap();
        assert!(flow.store.get_session().unwrap().is_some());
    }

    #[test]
    fn test_failed_auth_returns_to_anonymous() {
        let mut flow = anonymous_flow();
        flow.begin();
        flow.fail();
        assert_eq!(flow.state(), AuthState::Anonymous);
        assert!(flow.store.get_session().unwrap().is_none());
    }

    #[test]
    fn test_rejection_clears_session_and_reaches_anonymous() {
        let mut flow = anonymous_flow();
        flow.begin();
        flow.complete(session()).unwrap();

        // Simulated 401 on an authenticated fetch
        flow.expire().unwrap();
        assert_eq!(flow.state(), AuthState::Expired);
        assert!(flow.token().is_none());
        assert!(flow.store.get_session().unwrap().is_none());

        flow.acknowledge();
        assert_eq!(flow.state(), AuthState::Anonymous);
    }

    #[test]
    fn test_logout_clears_immediately() {
        let mut flow = anonymous_flow();
        flow.begin();
        flow.complete(session()).unwrap();

        flow.logout().unwrap();
        assert_eq!(flow.state(), AuthState::LoggedOut);
        assert!(flow.store.get_session().unwrap().is_none());

        flow.acknowledge();
        assert_eq!(flow.state(), AuthState::Anonymous);
    }

    #[test]
    fn test_acknowledge_is_noop_elsewhere() {
        let mut flow = anonymous_flow();
        flow.acknowledge();
        assert_eq!(flow.state(), AuthState::Anonymous);

        flow.begin();
        flow.acknowledge();
        assert_eq!(flow.state(), AuthState::Authenticating);
    }
}
