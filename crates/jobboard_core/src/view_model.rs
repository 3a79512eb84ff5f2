use crate::model::{Comment, JobCategory, JobId, UserProfile};
use crate::nav::{Route, Section};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub brand: &'static str,
    pub route: Route,
    pub page_url: String,
    pub section: Section,
    pub loading: bool,
    pub load_error: Option<String>,
    pub total_jobs: usize,
    pub recommended_count: usize,
    pub bookmark_count: usize,
    pub profile: UserProfile,
    /// Cards of the active section, in server order.
    pub cards: Vec<JobCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub category: JobCategory,
    pub posted_date: i64,
    pub salary: Option<String>,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_years: f64,
    pub like_count: u64,
    pub animating: bool,
    pub liking: bool,
    pub bookmarked: bool,
    pub comment_count: usize,
    pub comments_open: bool,
    /// Empty while the comment panel is closed.
    pub comments: Vec<Comment>,
    pub draft: String,
    pub posting_comment: bool,
}
