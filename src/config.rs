//! Client configuration parsed from environment variables.

use std::str::FromStr;

use crate::error::CommentsError;
use crate::types::{CommentQuery, DEFAULT_COMMENT_COUNT, LanguageCode, SortOrder};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
    /// Query used when a command does not override count, sort or language.
    pub default_query: CommentQuery,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: Timeouts::default(),
            default_query: CommentQuery::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `COMMENTS_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `COMMENTS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `COMMENTS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `COMMENTS_DEFAULT_COUNT`: default 5
    /// - `COMMENTS_DEFAULT_SORT`: `newest` (default) or `oldest`
    /// - `COMMENTS_DEFAULT_LANG`: default `en`
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Config`] if the sort order or language code is invalid.
    pub fn from_env() -> Result<Self, CommentsError> {
        let base_url = normalize_base_url(env_string("COMMENTS_BASE_URL").as_deref().unwrap_or(DEFAULT_BASE_URL));
        let timeouts = Timeouts {
            request_secs: env_parse("COMMENTS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("COMMENTS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        let count = env_parse("COMMENTS_DEFAULT_COUNT", DEFAULT_COMMENT_COUNT);
        let sort = match env_string("COMMENTS_DEFAULT_SORT") {
            Some(raw) => raw.parse::<SortOrder>().map_err(config_error)?,
            None => SortOrder::default(),
        };
        let language = match env_string("COMMENTS_DEFAULT_LANG") {
            Some(raw) => raw.parse::<LanguageCode>().map_err(config_error)?,
            None => LanguageCode::default(),
        };

        Ok(Self { base_url, timeouts, default_query: CommentQuery { count, sort, language } })
    }

    /// Replace the backend origin, normalizing the trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_string(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    let Some(raw) = env_string(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => default,
    }
}

fn config_error(err: CommentsError) -> CommentsError {
    match err {
        CommentsError::InvalidArgument(message) => CommentsError::Config(message),
        other => other,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
