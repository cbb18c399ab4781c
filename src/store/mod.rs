//! Backend seams: comment storage and viewer session lookup.
//!
//! DESIGN
//! ======
//! The view only talks to these traits so it can be driven by the HTTP
//! backend in production and by in-memory doubles in tests. One concrete
//! type, [`http::HttpBackend`], implements both against the portfolio
//! servlet endpoints.

pub mod http;

pub use http::HttpBackend;

use crate::error::CommentsError;
use crate::session::Session;
use crate::types::{Comment, CommentId, CommentQuery};

/// Read, create and delete comments.
#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// List comments for `query`. The backend may return more than `query.count`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the request fails or the body is malformed.
    async fn list_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, CommentsError>;

    /// Delete a single comment by id.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the backend rejects or never answers the request.
    async fn delete_comment(&self, id: CommentId) -> Result<(), CommentsError>;

    /// Delete every comment.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the backend rejects or never answers the request.
    async fn delete_all(&self) -> Result<(), CommentsError>;

    /// Submit a new comment as the current viewer.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the backend rejects or never answers the request.
    async fn post_comment(&self, text: &str) -> Result<(), CommentsError>;
}

/// Identity of the viewing user.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Fetch the current session state.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the request fails or the payload is malformed.
    async fn current_session(&self) -> Result<Session, CommentsError>;

    /// Look up the email associated with `user_name`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the request fails or the payload is malformed.
    async fn user_email(&self, user_name: &str) -> Result<Option<String>, CommentsError>;

    /// Set the current viewer's display name.
    ///
    /// # Errors
    ///
    /// Returns a [`CommentsError`] if the backend rejects or never answers the request.
    async fn set_user_name(&self, user_name: &str) -> Result<(), CommentsError>;
}
