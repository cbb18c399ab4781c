//! HTTP client for the portfolio comments servlets.
//!
//! Endpoints:
//! - `GET  /data?comments-num=N&sorting-cmt=ORDER&translation-cmt=LANG`
//! - `POST /data` (form `comment-input`)
//! - `POST /delete-comment` (form `id`)
//! - `GET  /delete-data`
//! - `GET  /login-check`
//! - `GET  /username-email?user-name=X`
//! - `POST /user-info` (form `user-name`)
//!
//! The form endpoints answer with a redirect back to the contact page. The
//! client never follows redirects, and any 2xx or 3xx status counts as success.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{CommentStore, SessionProvider};
use crate::config::ClientConfig;
use crate::error::CommentsError;
use crate::session::Session;
use crate::types::{
    Comment, CommentId, CommentQuery, DATA_ENDPOINT, DELETE_ALL_ENDPOINT, DELETE_COMMENT_ENDPOINT,
    LOGIN_CHECK_ENDPOINT, USER_EMAIL_ENDPOINT, USER_INFO_ENDPOINT,
};

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, CommentsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| CommentsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CommentsError> {
        let text = self.get_text(endpoint, query).await?;
        serde_json::from_str(&text).map_err(|e| decode_error(endpoint, &e))
    }

    async fn get_text(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String, CommentsError> {
        debug!(endpoint, params = query.len(), "GET");
        let response = self
            .http
            .get(endpoint_url(&self.base_url, endpoint))
            .query(query)
            .send()
            .await
            .map_err(|e| request_error(endpoint, &e))?;
        read_checked(endpoint, response).await
    }

    async fn post_form(&self, endpoint: &str, form: &[(&str, String)]) -> Result<(), CommentsError> {
        debug!(endpoint, "POST");
        let response = self
            .http
            .post(endpoint_url(&self.base_url, endpoint))
            .form(form)
            .send()
            .await
            .map_err(|e| request_error(endpoint, &e))?;
        read_checked(endpoint, response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CommentStore for HttpBackend {
    async fn list_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, CommentsError> {
        let comments: Vec<Comment> = self.get_json(DATA_ENDPOINT, &query.to_pairs()).await?;
        debug!(returned = comments.len(), requested = query.count, "comments fetched");
        Ok(comments)
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), CommentsError> {
        self.post_form(DELETE_COMMENT_ENDPOINT, &[("id", id.to_string())])
            .await
    }

    async fn delete_all(&self) -> Result<(), CommentsError> {
        self.get_text(DELETE_ALL_ENDPOINT, &[]).await?;
        Ok(())
    }

    async fn post_comment(&self, text: &str) -> Result<(), CommentsError> {
        self.post_form(DATA_ENDPOINT, &[("comment-input", text.to_owned())])
            .await
    }
}

#[async_trait::async_trait]
impl SessionProvider for HttpBackend {
    async fn current_session(&self) -> Result<Session, CommentsError> {
        let value: serde_json::Value = self.get_json(LOGIN_CHECK_ENDPOINT, &[]).await?;
        Session::from_login_info(&value)
    }

    async fn user_email(&self, user_name: &str) -> Result<Option<String>, CommentsError> {
        let email: Option<String> = self
            .get_json(USER_EMAIL_ENDPOINT, &[("user-name", user_name.to_owned())])
            .await?;
        Ok(email.filter(|e| !e.trim().is_empty()))
    }

    async fn set_user_name(&self, user_name: &str) -> Result<(), CommentsError> {
        self.post_form(USER_INFO_ENDPOINT, &[("user-name", user_name.to_owned())])
            .await
    }
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}

async fn read_checked(endpoint: &str, response: reqwest::Response) -> Result<String, CommentsError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| request_error(endpoint, &e))?;
    if !(status.is_success() || status.is_redirection()) {
        warn!(endpoint, status = status.as_u16(), "backend returned error status");
        return Err(CommentsError::Status { endpoint: endpoint.to_owned(), status: status.as_u16(), body: text });
    }
    Ok(text)
}

fn request_error(endpoint: &str, err: &reqwest::Error) -> CommentsError {
    warn!(endpoint, error = %err, "backend request failed");
    CommentsError::Request { endpoint: endpoint.to_owned(), message: err.to_string() }
}

fn decode_error(endpoint: &str, err: &serde_json::Error) -> CommentsError {
    CommentsError::Decode { endpoint: endpoint.to_owned(), message: err.to_string() }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
