use std::time::Duration;

use crate::model::{JobId, NewComment};

/// How long the like pulse stays visible after a successful like.
pub const LIKE_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// Fire-and-forget user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobs,
    LikeJob { job_id: JobId },
    AddComment { job_id: JobId, comment: NewComment },
    /// Deliver `Msg::LikeAnimationFinished` after `delay`.
    ScheduleAnimationEnd { job_id: JobId, delay: Duration },
    PersistBookmarks(Vec<JobId>),
    PersistProfile(crate::UserProfile),
    Notify(Toast),
    Share { job_id: JobId, payload: SharePayload },
    CopyToClipboard { text: String },
}
