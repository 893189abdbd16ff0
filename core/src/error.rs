//! Error types for the EVNotify client.

use thiserror::Error;

/// Errors surfaced by [`AccountClient`](crate::AccountClient) operations.
///
/// A completed HTTP exchange is never an error, whatever its status code:
/// operations run their field extraction against whatever body came back,
/// and a backend rejection shows up as a `None`/`false` result. `Err` is
/// reserved for the two cases below.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: connection failure, timeout, or the
    /// request could not be constructed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// An authenticated operation was invoked without both an account key
    /// and a session token. Raised locally, no request is sent.
    #[error("authentication required: account key and session token must be set")]
    AuthenticationRequired,
}

impl ClientError {
    /// HTTP status equivalent, for errors that map to one.
    /// `AuthenticationRequired` is the local stand-in for a 401.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::AuthenticationRequired => Some(401),
            ClientError::Transport(_) => None,
        }
    }
}
