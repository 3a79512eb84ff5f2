use jobboard_core::{
    filter_valid_comments, is_valid_comment, next_like_count, propose_comment,
    rollback_like_count, validate_draft, Comment, ValidationError, CURRENT_USER,
};

fn mixed_comments() -> Vec<Comment> {
    vec![
        Comment::new("Great role", "Alice", 1_700_000_000_000),
        Comment::new("   ", "Bob", 1_700_000_000_001),
        Comment::new("No author", "  ", 1_700_000_000_002),
        Comment::new("Zero date", "Carol", 0),
        Comment::new("Negative date", "Dan", -5),
        Comment::new("Applied!", "Eve", 1_700_000_000_003),
    ]
}

#[test]
fn valid_comment_needs_text_author_and_positive_date() {
    assert!(is_valid_comment(&Comment::new("hi", "me", 1)));
    assert!(!is_valid_comment(&Comment::new("", "me", 1)));
    assert!(!is_valid_comment(&Comment::new(" \t\n", "me", 1)));
    assert!(!is_valid_comment(&Comment::new("hi", "", 1)));
    assert!(!is_valid_comment(&Comment::new("hi", "   ", 1)));
    assert!(!is_valid_comment(&Comment::new("hi", "me", 0)));
    assert!(!is_valid_comment(&Comment::new("hi", "me", -1)));
}

#[test]
fn filter_keeps_only_valid_comments_in_order() {
    let filtered = filter_valid_comments(&mixed_comments());
    let texts: Vec<_> = filtered.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["Great role", "Applied!"]);
}

#[test]
fn filter_is_idempotent() {
    let once = filter_valid_comments(&mixed_comments());
    let twice = filter_valid_comments(&once);
    assert_eq!(once, twice);
}

#[test]
fn draft_is_trimmed_or_rejected() {
    assert_eq!(validate_draft("  hello  "), Ok("hello".to_string()));
    assert_eq!(validate_draft("   "), Err(ValidationError::EmptyComment));
    assert_eq!(validate_draft(""), Err(ValidationError::EmptyComment));
}

#[test]
fn proposed_comment_is_authored_by_current_user() {
    let comment = propose_comment(" Nice ", 42).unwrap();
    assert_eq!(comment.text, "Nice");
    assert_eq!(comment.author, CURRENT_USER);
    assert_eq!(comment.date, 42);
}

#[test]
fn like_counts_saturate() {
    assert_eq!(next_like_count(4), 5);
    assert_eq!(next_like_count(u64::MAX), u64::MAX);
    assert_eq!(rollback_like_count(5), 4);
    assert_eq!(rollback_like_count(0), 0);
}
