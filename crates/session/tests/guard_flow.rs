//! Integration tests for the sign-in flow.
//!
//! Walks a visitor through: bounced from a private page, logging in,
//! reloading, and logging out.

use session::{
    AuthState, Guard, MemoryStore, Role, RouteTable, SessionStore, TOKEN_KEY, USER_KEY, User,
    role_dashboard_redirect,
};

fn vet_user() -> User {
    User {
        id: "v7".to_string(),
        full_name: "Dr. Sara Malik".to_string(),
        email: "sara@example.com".to_string(),
        role: Role::Vet,
    }
}

#[test]
fn test_bounce_login_and_return() {
    let table = RouteTable::standard();
    let mut store = MemoryStore::new();
    let mut auth = AuthState::bootstrap(&store);

    // Anonymous visitor asks for a private page
    let from = match table.resolve("/health-tracker", &auth, None) {
        Guard::Redirect { to, from } => {
            assert_eq!(to, "/login");
            from
        }
        Guard::Render => panic!("private page rendered for anonymous visitor"),
    };
    assert_eq!(from.as_deref(), Some("/health-tracker"));

    // Login page renders while logged out
    assert_eq!(table.resolve("/login", &auth, from.as_deref()), Guard::Render);

    let dashboard = auth.login(&mut store, "jwt-token", vet_user()).unwrap();
    assert_eq!(dashboard, "/vet-dashboard");

    // Coming back to the login page now returns to the original target
    assert_eq!(
        table.resolve("/login", &auth, from.as_deref()),
        Guard::Redirect {
            to: "/health-tracker".to_string(),
            from: None,
        }
    );
    assert_eq!(table.resolve("/health-tracker", &auth, None), Guard::Render);
}

#[test]
fn test_reload_keeps_session_until_logout() {
    let table = RouteTable::standard();
    let mut store = MemoryStore::new();

    let mut auth = AuthState::anonymous();
    auth.login(&mut store, "jwt-token", vet_user()).unwrap();

    let reloaded = AuthState::bootstrap(&store);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.user().map(|u| u.role), Some(Role::Vet));
    assert_eq!(table.resolve("/add-pet", &reloaded, None), Guard::Render);

    auth.logout(&mut store);
    let reloaded = AuthState::bootstrap(&store);
    assert!(!reloaded.is_authenticated());
    assert!(matches!(
        table.resolve("/add-pet", &reloaded, None),
        Guard::Redirect { .. }
    ));
}

#[test]
fn test_reload_with_unknown_role_lands_on_pet_portal() {
    let table = RouteTable::standard();
    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "t".to_string());
    store.set(
        USER_KEY,
        r#"{"id":"u1","full_name":"A","email":"a@x","role":"admin"}"#.to_string(),
    );

    let auth = AuthState::bootstrap(&store);
    assert_eq!(table.resolve("/pet-portal", &auth, None), Guard::Render);
    assert_eq!(
        role_dashboard_redirect(&auth),
        Guard::Redirect {
            to: "/pet-portal".to_string(),
            from: None,
        }
    );
}
