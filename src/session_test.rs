use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

fn user(role: Role) -> User {
    User {
        id: 3,
        username: "sidorova".to_owned(),
        email: "s@example.com".to_owned(),
        full_name: Some("Anna Sidorova".to_owned()),
        role,
        created_at: None,
    }
}

// =============================================================
// Login / logout lifecycle
// =============================================================

#[test]
fn fresh_store_is_logged_out() {
    let store = store();
    assert!(!store.is_logged_in());
    assert!(store.current_identity().is_none());
    assert_eq!(store.view(), SessionView::ANONYMOUS);
}

#[test]
fn establish_persists_token_and_identity_together() {
    let mut store = store();
    store.establish("tok-1", &user(Role::Engineer));

    assert!(store.is_logged_in());
    assert_eq!(store.token().as_deref(), Some("tok-1"));
    let identity = store.current_identity().expect("identity");
    assert_eq!(identity, user(Role::Engineer));
    // Both keys set or both absent: the consistency property.
    assert_eq!(
        store.token().is_some(),
        store.current_identity().is_some()
    );
}

#[test]
fn establish_returns_exactly_the_backend_user() {
    // A login response's `user` field, decoded the way the auth service
    // decodes it, must round-trip through storage unchanged.
    let backend_user: User = serde_json::from_str(
        r#"{"id":42,"username":"ivanov","email":"i@example.com","full_name":null,"role":"observer"}"#,
    )
    .expect("user fixture");

    let mut store = store();
    store.establish("tok-2", &backend_user);
    assert_eq!(store.current_identity(), Some(backend_user));
}

#[test]
fn logout_clears_token_and_identity() {
    let mut store = store();
    store.establish("tok-1", &user(Role::Manager));
    store.logout();

    assert!(!store.is_logged_in());
    assert!(store.current_identity().is_none());
}

#[test]
fn logout_on_empty_store_is_a_noop() {
    let mut store = store();
    store.logout();
    assert!(!store.is_logged_in());
}

// =============================================================
// Inconsistent state: token present, identity unreadable
// =============================================================

#[test]
fn corrupt_identity_reads_as_none_but_token_survives() {
    let mut store = store();
    store.establish("tok-1", &user(Role::Engineer));
    store.storage_mut().set(IDENTITY_KEY, "{not json");

    assert!(store.is_logged_in());
    assert!(store.current_identity().is_none());
    assert_eq!(
        store.view(),
        SessionView {
            authenticated: true,
            role: None,
        }
    );
}

#[test]
fn unknown_role_string_reads_as_unreadable_identity() {
    let mut store = store();
    store.storage_mut().set(TOKEN_KEY, "tok-1");
    store.storage_mut().set(
        IDENTITY_KEY,
        r#"{"id":1,"username":"u","email":"e","full_name":null,"role":"admin"}"#,
    );

    assert!(store.is_logged_in());
    assert!(store.current_identity().is_none());
}

// =============================================================
// Token gating
// =============================================================

#[test]
fn authorized_requires_a_token() {
    let empty = store();
    assert_eq!(empty.authorized(), Err(ApiError::NotAuthenticated));

    let mut live = store();
    live.establish("tok-9", &user(Role::Observer));
    assert_eq!(live.authorized(), Ok("tok-9".to_owned()));
}

#[test]
fn view_reports_role_of_stored_identity() {
    let mut store = store();
    store.establish("tok-1", &user(Role::Observer));
    assert_eq!(
        store.view(),
        SessionView {
            authenticated: true,
            role: Some(Role::Observer),
        }
    );
}
