//! Comments widget client for the portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio backend stores visitor comments and answers a handful of
//! servlet endpoints (`/data`, `/login-check`, `/delete-comment`, ...). This
//! crate is the client side of that contract: a typed HTTP backend behind
//! the [`store::CommentStore`] and [`store::SessionProvider`] traits, a pure
//! [`render`] layer that turns comments plus a [`session::Session`] into
//! markup, and the [`view::CommentsView`] that ties fetch, render and delete
//! together.

pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

pub use config::ClientConfig;
pub use error::CommentsError;
pub use render::{CommentList, RenderedComment};
pub use session::Session;
pub use store::{CommentStore, HttpBackend, SessionProvider};
pub use types::{Comment, CommentId, CommentQuery, LanguageCode, SortOrder};
pub use view::CommentsView;
