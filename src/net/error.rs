//! Error taxonomy for REST calls.
//!
//! Every service operation surfaces one of these to its caller; none of
//! them panic. The guard layer never sees errors at all — ambiguous
//! session state is resolved to a deny there, not propagated here.

use thiserror::Error;

/// Failure modes of a backend call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// An authenticated endpoint was invoked with no stored token.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The backend rejected the supplied credentials or token.
    #[error("{0}")]
    Authentication(String),

    /// A success response carried a body we could not decode.
    #[error("malformed response from the server")]
    ResponseParse,

    /// Non-success status with a readable error message from the backend.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Network failure, or an error response whose body was unreadable.
    #[error("could not reach the server")]
    Connection,
}
