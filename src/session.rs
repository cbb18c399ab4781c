//! Viewer identity for the current page load.
//!
//! `GET /login-check` answers with a positional array
//! `[loggedInFlag, userName, email]`, e.g. `["1", "ada", "ada@example.com"]`
//! or `["0", null, null]`. [`Session::from_login_info`] turns that into a
//! typed value that render functions receive explicitly.

use serde_json::Value;

use crate::error::CommentsError;
use crate::types::{Comment, LOGIN_CHECK_ENDPOINT};

/// Authentication state of the viewing user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    /// Chosen display name. `None` when logged out or no name has been set yet.
    pub user_name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// A logged-out viewer.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in viewer with a display name.
    #[must_use]
    pub fn signed_in(user_name: impl Into<String>, email: Option<String>) -> Self {
        Self { logged_in: true, user_name: non_empty(Some(user_name.into())), email }
    }

    /// Logged in and has picked a display name; the precondition for owning comments.
    #[must_use]
    pub fn has_user_name(&self) -> bool {
        self.logged_in && self.user_name.is_some()
    }

    /// Whether this viewer authored `comment` and may therefore delete it.
    #[must_use]
    pub fn owns(&self, comment: &Comment) -> bool {
        self.has_user_name() && self.user_name.as_deref() == Some(comment.user_name.as_str())
    }

    /// Parse the `/login-check` payload.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Decode`] if the payload is not an array or its
    /// first element is not a recognizable login flag.
    pub fn from_login_info(value: &Value) -> Result<Self, CommentsError> {
        let Some(items) = value.as_array() else {
            return Err(decode_error(format!("expected array, got {value}")));
        };
        let flag = items.first().unwrap_or(&Value::Null);
        let logged_in = parse_login_flag(flag)?;
        if !logged_in {
            return Ok(Self::anonymous());
        }

        let user_name = non_empty(items.get(1).and_then(Value::as_str).map(ToOwned::to_owned));
        let email = non_empty(items.get(2).and_then(Value::as_str).map(ToOwned::to_owned));
        Ok(Self { logged_in, user_name, email })
    }
}

fn parse_login_flag(flag: &Value) -> Result<bool, CommentsError> {
    match flag {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(decode_error(format!("unrecognized login flag '{other}'"))),
        },
        Value::Null => Ok(false),
        other => Err(decode_error(format!("unrecognized login flag {other}"))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn decode_error(message: String) -> CommentsError {
    CommentsError::Decode { endpoint: LOGIN_CHECK_ENDPOINT.to_owned(), message }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
