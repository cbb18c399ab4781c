//! Error type shared by the store, session and view layers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is recovered locally. Every backend call returns
//! `Result<_, CommentsError>` and the caller decides what to do; the CLI
//! prints the error and exits non-zero.

use crate::types::CommentId;

/// Errors produced while talking to the comments backend or driving the view.
#[derive(Debug, thiserror::Error)]
pub enum CommentsError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// The backend answered with a non-success status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },

    /// A user-supplied value (sort order, language code) was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The comment is not rendered with a delete control for this session.
    #[error("comment {0} cannot be deleted by the current session")]
    NotDeletable(CommentId),
}

impl CommentsError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request { .. } => "E_REQUEST",
            Self::Status { .. } => "E_STATUS",
            Self::Decode { .. } => "E_DECODE",
            Self::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Self::NotDeletable(_) => "E_NOT_DELETABLE",
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::Status { status: 429 | 500..=599, .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
