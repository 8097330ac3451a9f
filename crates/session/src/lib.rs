//! # Session Crate
//!
//! Who is signed in, and which pages they may see.
//!
//! ## Components
//!
//! ### Session state
//! - `AuthState` restored from a `SessionStore` (token + JSON user record)
//! - `login` / `logout` keep the store and the state in step and return
//!   the page to navigate to (role dashboard, or the login page)
//!
//! ### Route guards
//! - `private_route`, `public_only_route`, `role_dashboard_redirect`
//! - `RouteTable` maps the application's paths to those guards
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{AuthState, MemoryStore, RouteTable, Guard};
//!
//! let mut store = MemoryStore::new();
//! let mut auth = AuthState::bootstrap(&store);
//!
//! let next = auth.login(&mut store, token, user)?;   // "/pet-portal" or "/vet-dashboard"
//!
//! match RouteTable::standard().resolve("/add-pet", &auth, None) {
//!     Guard::Render => { /* show page */ }
//!     Guard::Redirect { to, .. } => { /* navigate */ }
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod store;
pub mod auth;
pub mod guard;

// Re-export commonly used types
pub use error::{Result, SessionError};
pub use types::{Role, User};
pub use store::{MemoryStore, SessionStore, TOKEN_KEY, USER_KEY};
pub use auth::{AuthState, LOGIN_PATH, PET_PORTAL_PATH, VET_DASHBOARD_PATH, dashboard_for};
pub use guard::{
    Guard, HOME_PATH, RouteAccess, RouteTable, private_route, public_only_route,
    role_dashboard_redirect,
};
