//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or timeout failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or joining failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept verbatim for diagnostics.
        body: String,
    },

    /// Response arrived but did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No user id was given and no user is selected.
    #[error(
        "no target user: pass one with --user-id <id>, or select a user with `crmctl user select <id>`"
    )]
    UnresolvedUser,

    /// Selection file exists but could not be read, parsed, or written.
    #[error("selection file `{path}`: {message}")]
    Selection {
        /// Path of the selection file.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
