//! Comments view — fetch, render and delete flows.
//!
//! DESIGN
//! ======
//! `CommentsView` owns the currently rendered [`CommentList`] together with
//! the query and session it was rendered for. Loads replace the list
//! wholesale; single deletes edit it in place without re-fetching; bulk
//! deletes and new posts reload with the last query. Backend calls are
//! chained with `.await`, so a reload always observes the preceding write.
//!
//! ERROR HANDLING
//! ==============
//! Failures propagate unchanged. On error the rendered list is left as it
//! was before the call.

use std::sync::Arc;

use tracing::info;

use crate::error::CommentsError;
use crate::render::{CommentList, render_list};
use crate::session::Session;
use crate::store::{CommentStore, SessionProvider};
use crate::types::{CommentId, CommentQuery};

pub struct CommentsView {
    store: Arc<dyn CommentStore>,
    sessions: Arc<dyn SessionProvider>,
    list: CommentList,
    query: CommentQuery,
    session: Session,
}

impl CommentsView {
    #[must_use]
    pub fn new(store: Arc<dyn CommentStore>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            store,
            sessions,
            list: CommentList::default(),
            query: CommentQuery::default(),
            session: Session::anonymous(),
        }
    }

    #[must_use]
    pub fn list(&self) -> &CommentList {
        &self.list
    }

    /// Session the current list was rendered for.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Query the current list was rendered for.
    #[must_use]
    pub fn query(&self) -> &CommentQuery {
        &self.query
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.list.len()
    }

    /// Fetch comments for `query` and render them for `session`.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the listing request fails.
    pub async fn load_comments(
        &mut self,
        query: CommentQuery,
        session: Session,
    ) -> Result<&CommentList, CommentsError> {
        let comments = self.store.list_comments(&query).await?;
        let available = comments.len();
        self.list = render_list(comments, query.count, &session);
        info!(
            requested = query.count,
            available,
            shown = self.list.len(),
            sort = %query.sort,
            language = %query.language,
            "comments rendered"
        );
        self.query = query;
        self.session = session;
        Ok(&self.list)
    }

    /// Fetch the viewer's session, then load comments for it.
    ///
    /// # Errors
    ///
    /// Returns an error if either the session check or the listing fails.
    pub async fn refresh(&mut self, query: CommentQuery) -> Result<&CommentList, CommentsError> {
        let session = self.sessions.current_session().await?;
        self.load_comments(query, session).await
    }

    /// Delete one rendered comment and drop it from the list.
    ///
    /// Only comments rendered with a delete control can be deleted; anything
    /// else is rejected before a request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::NotDeletable`] for comments without a delete
    /// control, or the store's error if the delete request fails.
    pub async fn delete_one(&mut self, id: CommentId) -> Result<(), CommentsError> {
        let deletable = self.list.get(id).is_some_and(|item| item.deletable);
        if !deletable {
            return Err(CommentsError::NotDeletable(id));
        }
        self.store.delete_comment(id).await?;
        self.list.remove(id);
        info!(%id, remaining = self.list.len(), "comment deleted");
        Ok(())
    }

    /// Delete every comment, then reload with the last query and session.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the bulk delete or the reload fails.
    pub async fn delete_all(&mut self) -> Result<&CommentList, CommentsError> {
        self.store.delete_all().await?;
        info!("all comments deleted");
        self.reload().await
    }

    /// Submit a new comment, then reload with the last query and session.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::InvalidArgument`] for blank text, or the
    /// store's error if posting or the reload fails.
    pub async fn post_comment(&mut self, text: &str) -> Result<&CommentList, CommentsError> {
        if text.trim().is_empty() {
            return Err(CommentsError::InvalidArgument("comment text is empty".to_owned()));
        }
        self.store.post_comment(text).await?;
        info!(chars = text.chars().count(), "comment posted");
        self.reload().await
    }

    async fn reload(&mut self) -> Result<&CommentList, CommentsError> {
        let query = self.query.clone();
        let session = self.session.clone();
        self.load_comments(query, session).await
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
