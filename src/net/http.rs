//! Request plumbing shared by every service: bearer-header attachment and
//! the decode rules for the backend's JSON envelopes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative paths.
//! Server-side (SSR) and native builds: the transport stub reports a
//! connection error, so service calls degrade without panicking outside
//! the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;

/// HTTP methods used by the services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A response as seen by the decode layer: status plus raw body text.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a non-success response into an error.
///
/// A parseable body yields the backend's message (or a generic one when
/// the `error` key is missing); an unreadable body is indistinguishable
/// from a transport failure and reported as such.
pub fn failure(raw: &RawResponse) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(&raw.body) {
        Ok(envelope) => ApiError::Request {
            status: raw.status,
            message: envelope
                .error
                .unwrap_or_else(|| format!("request failed ({})", raw.status)),
        },
        Err(_) => ApiError::Connection,
    }
}

/// Decode a response into `T` according to the backend's conventions.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    if is_success(raw.status) {
        serde_json::from_str(&raw.body).map_err(|_| ApiError::ResponseParse)
    } else {
        Err(failure(raw))
    }
}

/// Like [`decode`], for endpoints whose success body is irrelevant.
pub fn check_status(raw: &RawResponse) -> Result<(), ApiError> {
    if is_success(raw.status) {
        Ok(())
    } else {
        Err(failure(raw))
    }
}

/// Issue a request, attaching `Authorization: Bearer <token>` when a token
/// is supplied and serializing `body` as JSON when present.
pub async fn send(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
            Method::Delete => Request::delete(path),
        };
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder.json(&value).map_err(|_| ApiError::Connection)?,
            None => builder.build().map_err(|_| ApiError::Connection)?,
        };

        let response = request.send().await.map_err(|_| ApiError::Connection)?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Connection)
    }
}

/// Request plus decode in one step.
pub async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let raw = send(method, path, token, body).await?;
    decode(&raw)
}

/// Request where only the status matters (deletes).
pub async fn request_empty(
    method: Method,
    path: &str,
    token: Option<&str>,
) -> Result<(), ApiError> {
    let raw = send(method, path, token, None).await?;
    check_status(&raw)
}
