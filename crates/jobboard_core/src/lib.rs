//! Job board core: pure model, interaction state machine and view-model helpers.
mod bookmarks;
mod cache;
mod card;
mod comments;
mod effect;
mod model;
mod msg;
mod nav;
mod recommend;
mod state;
mod update;
mod view_model;

pub use bookmarks::BookmarkSet;
pub use cache::JobCache;
pub use card::{CardState, LikePhase, SubmitOutcome};
pub use comments::{
    filter_valid_comments, is_valid_comment, next_like_count, propose_comment,
    rollback_like_count, validate_draft, ValidationError,
};
pub use effect::{Effect, Severity, SharePayload, Toast, LIKE_ANIMATION};
pub use model::{
    Comment, ExperienceRequired, Job, JobCategory, JobId, NewComment, UserProfile, CURRENT_USER,
};
pub use msg::Msg;
pub use nav::{page_url, Route, Section, BRAND_TITLE};
pub use recommend::{job_keywords, matches_profile, profile_keywords, recommend};
pub use state::{AppState, DEFAULT_SITE_URL};
pub use update::update;
pub use view_model::{AppViewModel, JobCardView};
