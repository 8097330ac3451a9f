//! Authentication state and its transitions.
//!
//! `AuthState` is what the rest of the app asks "who is signed in?". It is
//! restored from a [`SessionStore`] at startup and written back on every
//! login/logout, so the store and the in-memory state never disagree.

use crate::error::{Result, SessionError};
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};
use crate::types::{Role, User};
use serde_json::Value;
use tracing::{debug, warn};

pub const LOGIN_PATH: &str = "/login";
pub const PET_PORTAL_PATH: &str = "/pet-portal";
pub const VET_DASHBOARD_PATH: &str = "/vet-dashboard";

/// Landing page for a role after login
pub fn dashboard_for(role: Role) -> &'static str {
    match role {
        Role::Vet => VET_DASHBOARD_PATH,
        Role::Owner => PET_PORTAL_PATH,
    }
}

/// Token and user of the current session, either possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
    user: Option<User>,
}

impl AuthState {
    /// A logged-out state
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a state directly from its parts. An empty token counts as none.
    pub fn from_parts(token: Option<String>, user: Option<User>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            user,
        }
    }

    /// Restore the session persisted in `store`.
    ///
    /// An empty token reads as no token. Any JSON object is accepted as the
    /// user; text that is not a JSON object is dropped with a warning,
    /// leaving the session logged out.
    pub fn bootstrap(store: &dyn SessionStore) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store.get(USER_KEY).and_then(|raw| decode_stored_user(&raw));

        let state = Self::from_parts(token, user);
        debug!(authenticated = state.is_authenticated(), "Session restored");
        state
    }

    /// Start a session and persist it. Returns the dashboard to navigate to.
    pub fn login(
        &mut self,
        store: &mut dyn SessionStore,
        token: impl Into<String>,
        user: User,
    ) -> Result<&'static str> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let encoded = serde_json::to_string(&user)?;
        store.set(TOKEN_KEY, token.clone());
        store.set(USER_KEY, encoded);

        let destination = dashboard_for(user.role);
        debug!(user_id = %user.id, role = %user.role, "Logged in");
        self.token = Some(token);
        self.user = Some(user);
        Ok(destination)
    }

    /// End the session and clear the store. Returns the login page.
    pub fn logout(&mut self, store: &mut dyn SessionStore) -> &'static str {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
        debug!("Logged out");
        LOGIN_PATH
    }

    /// Both a token and a user are present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Value for the `Authorization` header of API calls, when a token is held
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

fn decode_stored_user(raw: &str) -> Option<User> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable stored user");
            return None;
        }
    };
    if !value.is_object() {
        warn!("Discarding stored user that is not a JSON object");
        return None;
    }
    serde_json::from_value(value)
        .map_err(|e| warn!(error = %e, "Discarding unreadable stored user"))
        .ok()
}
