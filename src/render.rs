//! Pure rendering from comments + session to markup.
//!
//! DESIGN
//! ======
//! Nothing in this module performs I/O. [`render_list`] applies the count
//! limit and the ownership rule; [`CommentList`] then emits either the HTML
//! fragment the page embeds or a plain-text listing for terminals.

use crate::session::Session;
use crate::types::{Comment, CommentId};

/// One comment as it appears in the list.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedComment {
    pub comment: Comment,
    /// Rendered with a delete control.
    pub deletable: bool,
}

impl RenderedComment {
    /// `"{user} says: {text}"`, unescaped.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} says: {}", self.comment.user_name, self.comment.text)
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let label = escape_html(&self.label());
        if self.deletable {
            format!(
                "<li><span>{label} </span><button data-comment-id=\"{}\">Delete</button></li>",
                self.comment.id
            )
        } else {
            format!("<li>{label}</li>")
        }
    }

    /// One terminal line. Control characters from the backend become spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        let label = strip_control(&self.label());
        if self.deletable {
            format!("#{} {label} [delete]", self.comment.id)
        } else {
            format!("#{} {label}", self.comment.id)
        }
    }
}

/// The rendered comment list, in backend order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentList {
    items: Vec<RenderedComment>,
}

impl CommentList {
    #[must_use]
    pub fn items(&self) -> &[RenderedComment] {
        &self.items
    }

    /// Number of comments shown; the page's comment counter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CommentId) -> Option<&RenderedComment> {
        self.items.iter().find(|item| item.comment.id == id)
    }

    /// Drop the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: CommentId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.comment.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<ul id=\"comments-container\">");
        for item in &self.items {
            out.push_str(&item.to_html());
        }
        out.push_str("</ul>");
        out
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(&item.to_text());
            out.push('\n');
        }
        out
    }
}

/// Render a single comment for `session`.
#[must_use]
pub fn render_comment(comment: &Comment, session: &Session) -> RenderedComment {
    render_owned(comment.clone(), session)
}

/// Render at most `count` comments, keeping backend order.
#[must_use]
pub fn render_list(comments: Vec<Comment>, count: usize, session: &Session) -> CommentList {
    let items = comments
        .into_iter()
        .take(count)
        .map(|comment| render_owned(comment, session))
        .collect();
    CommentList { items }
}

fn render_owned(comment: Comment, session: &Session) -> RenderedComment {
    let deletable = session.owns(&comment);
    RenderedComment { comment, deletable }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace newlines, escape sequences and other control characters with spaces.
#[must_use]
pub fn strip_control(raw: &str) -> String {
    raw.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
