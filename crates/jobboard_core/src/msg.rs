use crate::model::{Job, JobId, UserProfile};
use crate::nav::{Route, Section};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Locally persisted state read at startup.
    Restore {
        bookmarks: Vec<JobId>,
        profile: UserProfile,
    },
    /// User asked for the job list to be (re)loaded.
    RefreshRequested,
    /// Backend returned the full job list.
    JobsLoaded(Vec<Job>),
    JobsLoadFailed { message: String },
    /// User saved a new profile.
    ProfileUpdated(UserProfile),
    SectionSelected(Section),
    Navigate(Route),
    LikeClicked { job_id: JobId },
    LikeSucceeded { job_id: JobId, job: Job },
    LikeFailed { job_id: JobId, message: String },
    /// The post-like pulse has run its course.
    LikeAnimationFinished { job_id: JobId },
    CommentsToggled { job_id: JobId },
    CommentDraftChanged { job_id: JobId, text: String },
    /// User pressed "post"; `now_millis` stamps the proposed comment.
    CommentSubmitted { job_id: JobId, now_millis: i64 },
    CommentPosted { job_id: JobId, job: Job },
    CommentFailed { job_id: JobId, message: String },
    BookmarkToggled { job_id: JobId },
    ShareClicked { job_id: JobId },
    /// The platform could not share; fall back to the clipboard.
    ShareUnavailable { job_id: JobId, url: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    NoOp,
}
