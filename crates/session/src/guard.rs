//! Route guards: given the auth state, render the page or redirect.
//!
//! Three guards exist:
//! - private routes send anonymous visitors to `/login`, remembering where
//!   they were headed
//! - public-only routes (login, signup) send signed-in users back to where
//!   they came from, or home
//! - the role dashboard redirect picks the dashboard for the user's role
//!
//! [`RouteTable`] maps paths to the guard that protects them.

use crate::auth::{AuthState, LOGIN_PATH, dashboard_for};

pub const HOME_PATH: &str = "/";

/// Outcome of a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Show the requested page
    Render,
    /// Navigate elsewhere (replacing the history entry)
    Redirect {
        to: String,
        /// Page the visitor was trying to reach, for returning after login
        from: Option<String>,
    },
}

impl Guard {
    fn redirect(to: impl Into<String>) -> Self {
        Guard::Redirect {
            to: to.into(),
            from: None,
        }
    }
}

/// Page that requires a signed-in user.
pub fn private_route(auth: &AuthState, location: &str) -> Guard {
    if auth.is_authenticated() {
        Guard::Render
    } else {
        Guard::Redirect {
            to: LOGIN_PATH.to_string(),
            from: Some(location.to_string()),
        }
    }
}

/// Page only meant for visitors who are not signed in.
///
/// `from` is the page a private guard bounced the visitor away from.
pub fn public_only_route(auth: &AuthState, from: Option<&str>) -> Guard {
    if auth.is_authenticated() {
        Guard::redirect(from.filter(|f| !f.is_empty()).unwrap_or(HOME_PATH))
    } else {
        Guard::Render
    }
}

/// Always redirects: to `/login` without a user, else to the role dashboard.
///
/// Only the stored user is consulted, not the token.
pub fn role_dashboard_redirect(auth: &AuthState) -> Guard {
    match auth.user() {
        None => Guard::redirect(LOGIN_PATH),
        Some(user) => Guard::redirect(dashboard_for(user.role)),
    }
}

/// How a route is protected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Private,
    PublicOnly,
    RoleDashboard,
}

/// Path-to-guard table for the application.
///
/// Paths not in the table are public (they render the not-found page).
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, RouteAccess)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// The application's routes
    pub fn standard() -> Self {
        Self::new()
            .with_route("/", RouteAccess::Public)
            .with_route("/marketplace", RouteAccess::Public)
            .with_route("/find-vets", RouteAccess::Public)
            .with_route("/about", RouteAccess::Public)
            .with_route("/contact", RouteAccess::Public)
            .with_route("/ai-health-check", RouteAccess::Private)
            .with_route("/health-tracker", RouteAccess::Private)
            .with_route("/add-pet", RouteAccess::Private)
            .with_route("/pet-portal", RouteAccess::Private)
            .with_route("/login", RouteAccess::PublicOnly)
            .with_route("/signup", RouteAccess::PublicOnly)
    }

    /// Add or replace a route (builder pattern)
    pub fn with_route(mut self, path: &str, access: RouteAccess) -> Self {
        let path = normalize_path(path);
        match self.routes.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = access,
            None => self.routes.push((path, access)),
        }
        self
    }

    pub fn access(&self, path: &str) -> RouteAccess {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, access)| *access)
            .unwrap_or(RouteAccess::Public)
    }

    /// Apply the guard protecting `path`.
    ///
    /// `from` is forwarded to public-only routes.
    pub fn resolve(&self, path: &str, auth: &AuthState, from: Option<&str>) -> Guard {
        match self.access(path) {
            RouteAccess::Public => Guard::Render,
            RouteAccess::Private => private_route(auth, path),
            RouteAccess::PublicOnly => public_only_route(auth, from),
            RouteAccess::RoleDashboard => role_dashboard_redirect(auth),
        }
    }
}

/// Drop query string, fragment and trailing slashes; keep "/" for the root.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}
