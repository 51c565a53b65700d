//! REST service wrappers for the tracker backend.
//!
//! DESIGN
//! ======
//! One module per backend resource (`auth`, `projects`, `defects`,
//! `comments`, `users`) over a shared request/decode layer in `http`.
//! Service functions take the session store so the bearer token is read at
//! call time, and surface failures as [`error::ApiError`] instead of
//! panicking.

pub mod auth;
pub mod comments;
pub mod defects;
pub mod error;
pub mod http;
pub mod projects;
pub mod types;
pub mod users;
