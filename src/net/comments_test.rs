use super::*;
use crate::net::types::Role;

fn user(id: i64, role: Role) -> User {
    User {
        id,
        username: format!("user-{id}"),
        email: format!("u{id}@example.com"),
        full_name: None,
        role,
        created_at: None,
    }
}

fn comment(author_id: i64) -> Comment {
    Comment {
        id: 1,
        defect_id: 10,
        user_id: author_id,
        user: None,
        content: "needs a second inspection".to_owned(),
        created_at: None,
    }
}

#[test]
fn manager_may_delete_any_comment() {
    let manager = user(1, Role::Manager);
    assert!(can_delete_comment(Some(&manager), &comment(99)));
}

#[test]
fn author_may_delete_own_comment() {
    let engineer = user(5, Role::Engineer);
    assert!(can_delete_comment(Some(&engineer), &comment(5)));
}

#[test]
fn non_author_non_manager_may_not_delete() {
    for role in [Role::Engineer, Role::Observer] {
        let user = user(5, role);
        assert!(!can_delete_comment(Some(&user), &comment(6)), "{role:?}");
    }
}

#[test]
fn anonymous_may_not_delete() {
    assert!(!can_delete_comment(None, &comment(5)));
}

#[test]
fn comments_envelope_defaults_to_empty_list() {
    let raw = http::RawResponse {
        status: 200,
        body: r#"{"message":"no comments"}"#.to_owned(),
    };
    let envelope: CommentsEnvelope = http::decode(&raw).expect("comments envelope");
    assert!(envelope.comments.is_empty());
}
