use super::*;

fn comment(id: i64, user_name: &str, text: &str) -> Comment {
    Comment {
        id: CommentId(id),
        user_name: user_name.to_owned(),
        text: text.to_owned(),
        time: id * 1000,
        language_code: None,
        email: None,
    }
}

fn sample(n: i64) -> Vec<Comment> {
    (1..=n).map(|i| comment(i, "someone", &format!("comment {i}"))).collect()
}

// =============================================================
// Truncation
// =============================================================

#[test]
fn renders_min_of_count_and_available() {
    let session = Session::anonymous();
    for (count, available, expected) in [(5, 2, 2), (2, 5, 2), (0, 3, 0), (3, 0, 0), (4, 4, 4)] {
        let list = render_list(sample(available), count, &session);
        assert_eq!(list.len(), expected, "count={count} available={available}");
    }
}

#[test]
fn truncation_keeps_backend_order() {
    let list = render_list(sample(4), 2, &Session::anonymous());
    let ids: Vec<i64> = list.items().iter().map(|item| item.comment.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
}

// =============================================================
// Delete controls
// =============================================================

#[test]
fn owner_gets_delete_control_only_on_own_comment() {
    let comments = vec![comment(1, "a", "first"), comment(2, "b", "second")];
    let session = Session::signed_in("a", None);
    let list = render_list(comments, 5, &session);

    assert_eq!(list.len(), 2);
    assert!(list.items()[0].deletable);
    assert!(!list.items()[1].deletable);
}

#[test]
fn anonymous_viewer_gets_no_delete_controls() {
    let comments = vec![comment(1, "a", "x"), comment(2, "a", "y")];
    let list = render_list(comments, 5, &Session::anonymous());
    assert!(list.items().iter().all(|item| !item.deletable));
}

#[test]
fn render_comment_matches_list_rule() {
    let session = Session::signed_in("a", None);
    assert!(render_comment(&comment(1, "a", "x"), &session).deletable);
    assert!(!render_comment(&comment(1, "b", "x"), &session).deletable);
}

#[test]
fn list_items_equal_single_renders() {
    let session = Session::signed_in("a", None);
    let comments = vec![comment(1, "a", "x"), comment(2, "b", "y"), comment(3, "a", "z")];
    let expected: Vec<RenderedComment> = comments.iter().map(|c| render_comment(c, &session)).collect();
    let list = render_list(comments, 5, &session);
    assert_eq!(list.items(), expected.as_slice());
}

// =============================================================
// Markup
// =============================================================

#[test]
fn plain_item_html() {
    let item = render_comment(&comment(1, "b", "nice site"), &Session::anonymous());
    assert_eq!(item.to_html(), "<li>b says: nice site</li>");
}

#[test]
fn deletable_item_html_has_button_with_id() {
    let item = render_comment(&comment(7, "a", "mine"), &Session::signed_in("a", None));
    assert_eq!(
        item.to_html(),
        "<li><span>a says: mine </span><button data-comment-id=\"7\">Delete</button></li>"
    );
}

#[test]
fn user_text_is_escaped() {
    let item = render_comment(&comment(1, "<b>x</b>", "a & \"b\""), &Session::anonymous());
    assert_eq!(item.to_html(), "<li>&lt;b&gt;x&lt;/b&gt; says: a &amp; &quot;b&quot;</li>");
}

#[test]
fn list_html_wraps_items_in_container() {
    let list = render_list(vec![comment(1, "a", "x")], 5, &Session::anonymous());
    assert_eq!(list.to_html(), "<ul id=\"comments-container\"><li>a says: x</li></ul>");
}

#[test]
fn empty_list_html_is_empty_container() {
    let list = CommentList::default();
    assert!(list.is_empty());
    assert_eq!(list.to_html(), "<ul id=\"comments-container\"></ul>");
}

#[test]
fn text_listing_marks_deletable_lines() {
    let comments = vec![comment(1, "a", "x"), comment(2, "b", "y")];
    let list = render_list(comments, 5, &Session::signed_in("a", None));
    assert_eq!(list.to_text(), "#1 a says: x [delete]\n#2 b says: y\n");
}

#[test]
fn text_listing_keeps_one_line_per_item_for_multiline_comments() {
    let comments = vec![
        comment(1, "a", "line one\nFAKE #99 b says: x [delete]"),
        comment(2, "b", "ok\x1b[31m"),
        comment(3, "c\r\n", "tab\there"),
    ];
    let list = render_list(comments, 5, &Session::anonymous());

    let text = list.to_text();
    assert_eq!(text.lines().count(), list.len());
    assert!(!text.contains('\x1b'));
    assert!(!text.contains('\r'));
    assert!(text.starts_with("#1 a says: line one FAKE #99 b says: x [delete]\n#2 b says: ok [31m\n"));
}

#[test]
fn html_keeps_original_text() {
    let item = render_comment(&comment(1, "b", "two\nlines"), &Session::anonymous());
    assert_eq!(item.to_html(), "<li>b says: two\nlines</li>");
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_drops_exactly_one_id() {
    let mut list = render_list(sample(3), 5, &Session::anonymous());
    assert!(list.remove(CommentId(2)));
    assert_eq!(list.len(), 2);
    assert!(list.get(CommentId(2)).is_none());
    assert!(list.get(CommentId(1)).is_some());
    assert!(list.get(CommentId(3)).is_some());
}

#[test]
fn remove_missing_id_is_noop() {
    let mut list = render_list(sample(2), 5, &Session::anonymous());
    assert!(!list.remove(CommentId(99)));
    assert_eq!(list.len(), 2);
}
