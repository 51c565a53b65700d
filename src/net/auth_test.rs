use super::*;
use crate::net::error::ApiError;
use crate::net::http::{self, RawResponse};
use crate::net::types::Role;

#[test]
fn auth_failure_keeps_backend_message() {
    let err = auth_failure(ApiError::Request {
        status: 401,
        message: "invalid username or password".to_owned(),
    });
    assert_eq!(
        err,
        ApiError::Authentication("invalid username or password".to_owned())
    );
}

#[test]
fn auth_failure_masks_unreadable_bodies_with_generic_message() {
    let err = auth_failure(ApiError::Connection);
    assert_eq!(
        err,
        ApiError::Authentication("could not reach the server".to_owned())
    );

    let err = auth_failure(ApiError::ResponseParse);
    assert_eq!(
        err,
        ApiError::Authentication("could not reach the server".to_owned())
    );
}

#[test]
fn auth_envelope_decodes_token_and_user() {
    let raw = RawResponse {
        status: 200,
        body: r#"{
            "message": "login successful",
            "token": "tok-123",
            "user": {
                "id": 7,
                "username": "petrov",
                "email": "p@example.com",
                "full_name": "Petr Petrov",
                "role": "manager"
            }
        }"#
        .to_owned(),
    };
    let envelope: AuthEnvelope = http::decode(&raw).expect("auth envelope");
    assert_eq!(envelope.token, "tok-123");
    assert_eq!(envelope.user.id, 7);
    assert_eq!(envelope.user.role, Role::Manager);
}
