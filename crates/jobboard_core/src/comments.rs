use thiserror::Error;

use crate::model::{Comment, NewComment, CURRENT_USER};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Comment cannot be empty")]
    EmptyComment,
}

pub fn is_valid_comment(comment: &Comment) -> bool {
    !comment.text.trim().is_empty() && !comment.author.trim().is_empty() && comment.date > 0
}

/// Keeps only displayable comments, preserving their order.
pub fn filter_valid_comments(comments: &[Comment]) -> Vec<Comment> {
    comments
        .iter()
        .filter(|comment| is_valid_comment(comment))
        .cloned()
        .collect()
}

/// Returns the trimmed draft, or an error when nothing is left to post.
pub fn validate_draft(draft: &str) -> Result<String, ValidationError> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    Ok(trimmed.to_string())
}

/// Builds the provisional comment for a draft typed by the local user.
pub fn propose_comment(draft: &str, now_millis: i64) -> Result<NewComment, ValidationError> {
    let text = validate_draft(draft)?;
    Ok(NewComment {
        text,
        author: CURRENT_USER.to_string(),
        date: now_millis,
    })
}

pub fn next_like_count(current: u64) -> u64 {
    current.saturating_add(1)
}

pub fn rollback_like_count(current: u64) -> u64 {
    current.saturating_sub(1)
}
