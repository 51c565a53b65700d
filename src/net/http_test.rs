use super::*;
use crate::net::types::User;

fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: body.to_owned(),
    }
}

#[test]
fn decode_success_body() {
    let user: User = decode(&raw(
        200,
        r#"{"id":1,"username":"ivanov","email":"i@example.com","full_name":"Ivan Ivanov","role":"engineer"}"#,
    ))
    .expect("user");
    assert_eq!(user.username, "ivanov");
    assert_eq!(user.full_name.as_deref(), Some("Ivan Ivanov"));
}

#[test]
fn decode_success_with_bad_body_is_parse_error() {
    let result: Result<User, _> = decode(&raw(200, "<html>proxy page</html>"));
    assert_eq!(result, Err(ApiError::ResponseParse));
}

#[test]
fn decode_failure_uses_backend_message() {
    let result: Result<User, _> = decode(&raw(404, r#"{"error":"project not found"}"#));
    assert_eq!(
        result,
        Err(ApiError::Request {
            status: 404,
            message: "project not found".to_owned(),
        })
    );
}

#[test]
fn decode_failure_without_error_key_gets_generic_message() {
    let result: Result<User, _> = decode(&raw(500, "{}"));
    assert_eq!(
        result,
        Err(ApiError::Request {
            status: 500,
            message: "request failed (500)".to_owned(),
        })
    );
}

#[test]
fn decode_failure_with_unreadable_body_is_connection_error() {
    let result: Result<User, _> = decode(&raw(502, "Bad Gateway"));
    assert_eq!(result, Err(ApiError::Connection));
}

#[test]
fn check_status_accepts_any_2xx() {
    assert!(check_status(&raw(204, "")).is_ok());
    assert!(check_status(&raw(299, "ignored")).is_ok());
}

#[test]
fn check_status_rejects_non_2xx() {
    assert_eq!(
        check_status(&raw(403, r#"{"error":"forbidden"}"#)),
        Err(ApiError::Request {
            status: 403,
            message: "forbidden".to_owned(),
        })
    );
}
