//! Wire DTOs for the comments backend and the query values sent with them.
//!
//! DESIGN
//! ======
//! `Comment` mirrors the JSON objects returned by `GET /data` (camelCase keys).
//! `SortOrder` and `LanguageCode` are the typed forms of the `sorting-cmt` and
//! `translation-cmt` query parameters; both parse from their wire strings so
//! the CLI and the environment config share one validation path.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CommentsError;

/// Page size used by the backend when no count is requested.
pub const DEFAULT_COMMENT_COUNT: usize = 5;

/// Language code sent when the caller does not ask for a translation.
pub const DEFAULT_LANGUAGE: &str = "en";

// Backend paths, relative to the configured base URL.
pub const DATA_ENDPOINT: &str = "/data";
pub const DELETE_COMMENT_ENDPOINT: &str = "/delete-comment";
pub const DELETE_ALL_ENDPOINT: &str = "/delete-data";
pub const LOGIN_CHECK_ENDPOINT: &str = "/login-check";
pub const USER_EMAIL_ENDPOINT: &str = "/username-email";
pub const USER_INFO_ENDPOINT: &str = "/user-info";

/// Backend-assigned comment identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-submitted comment as returned by `GET /data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Identifier used by `POST /delete-comment`.
    pub id: CommentId,
    /// Display name of the author.
    #[serde(default)]
    pub user_name: String,
    /// Comment body, possibly translated.
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(alias = "timestamp", default, deserialize_with = "deserialize_i64_from_number")]
    pub time: i64,
    /// Language the text was translated into, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Author email, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Order of the returned collection (`sorting-cmt`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CommentsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(CommentsError::InvalidArgument(format!(
                "unknown sort order '{other}' (expected 'newest' or 'oldest')"
            ))),
        }
    }
}

/// Target language for translated comments (`translation-cmt`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_owned())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = CommentsError;

    /// Accepts 2 to 8 ASCII alphanumerics or `-`, e.g. `en`, `zh-CN`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim();
        let valid = (2..=8).contains(&code.len())
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !code.starts_with('-');
        if !valid {
            return Err(CommentsError::InvalidArgument(format!("invalid language code '{raw}'")));
        }
        Ok(Self(code.to_owned()))
    }
}

/// Parameters of a comment listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentQuery {
    /// Maximum number of comments to render.
    pub count: usize,
    pub sort: SortOrder,
    pub language: LanguageCode,
}

impl Default for CommentQuery {
    fn default() -> Self {
        Self { count: DEFAULT_COMMENT_COUNT, sort: SortOrder::default(), language: LanguageCode::default() }
    }
}

impl CommentQuery {
    /// Query-string pairs for `GET /data`, in wire order.
    #[must_use]
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("comments-num", self.count.to_string()),
            ("sorting-cmt", self.sort.as_str().to_owned()),
            ("translation-cmt", self.language.as_str().to_owned()),
        ]
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            match number.as_f64() {
                Some(float)
                    if float.is_finite()
                        && float.fract() == 0.0
                        && float >= i64::MIN as f64
                        && float <= i64::MAX as f64 =>
                {
                    Ok(float as i64)
                }
                _ => Err(D::Error::custom("expected integer-compatible number")),
            }
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
