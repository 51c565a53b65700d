use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(state.role().is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn auth_state_reports_role_of_user() {
    let user: User = serde_json::from_str(
        r#"{"id":1,"username":"ivanov","email":"i@example.com","full_name":null,"role":"observer"}"#,
    )
    .expect("user");
    let state = AuthState {
        user: Some(user),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Observer));
}
