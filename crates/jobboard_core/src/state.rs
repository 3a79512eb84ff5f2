use std::collections::BTreeMap;

use crate::bookmarks::BookmarkSet;
use crate::cache::JobCache;
use crate::card::{CardState, LikePhase};
use crate::model::{Job, JobId, UserProfile};
use crate::nav::{page_url, Route, Section, BRAND_TITLE};
use crate::recommend::recommend;
use crate::view_model::{AppViewModel, JobCardView};

pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    cache: JobCache,
    cards: BTreeMap<JobId, CardState>,
    bookmarks: BookmarkSet,
    profile: UserProfile,
    recommended: Vec<JobId>,
    section: Section,
    route: Route,
    site_url: String,
    loading: bool,
    load_error: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: JobCache::new(),
            cards: BTreeMap::new(),
            bookmarks: BookmarkSet::new(),
            profile: UserProfile::default(),
            recommended: Vec::new(),
            section: Section::default(),
            route: Route::default(),
            site_url: DEFAULT_SITE_URL.to_string(),
            loading: false,
            load_error: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_url(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let visible: Vec<&Job> = match self.section {
            Section::All => self.cache.jobs().iter().collect(),
            Section::Recommended => self
                .recommended
                .iter()
                .filter_map(|job_id| self.cache.get(*job_id))
                .collect(),
        };

        let cards = visible
            .into_iter()
            .filter_map(|job| {
                let card = self.cards.get(&job.id)?;
                Some(self.card_view(job, card))
            })
            .collect();

        AppViewModel {
            brand: BRAND_TITLE,
            route: self.route,
            page_url: self.current_url(),
            section: self.section,
            loading: self.loading,
            load_error: self.load_error.clone(),
            total_jobs: self.cache.len(),
            recommended_count: self.recommended.len(),
            bookmark_count: self.bookmarks.len(),
            profile: self.profile.clone(),
            cards,
            dirty: self.dirty,
        }
    }

    fn card_view(&self, job: &Job, card: &CardState) -> JobCardView {
        JobCardView {
            job_id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.clone(),
            category: job.category(),
            posted_date: job.posted_date,
            salary: job.salary.clone(),
            description: job.description.clone(),
            required_skills: job.required_skills.clone(),
            experience_years: job.experience_required.years,
            like_count: card.like_count(),
            animating: card.is_animating(),
            liking: card.like_phase() == LikePhase::Liking,
            bookmarked: self.bookmarks.is_bookmarked(job.id),
            comment_count: card.comments().len(),
            comments_open: card.comments_open(),
            comments: if card.comments_open() {
                card.comments().to_vec()
            } else {
                Vec::new()
            },
            draft: card.draft().to_string(),
            posting_comment: card.is_comment_in_flight(),
        }
    }

    pub fn cache(&self) -> &JobCache {
        &self.cache
    }

    pub fn card(&self, job_id: JobId) -> Option<&CardState> {
        self.cards.get(&job_id)
    }

    pub(crate) fn card_mut(&mut self, job_id: JobId) -> Option<&mut CardState> {
        self.cards.get_mut(&job_id)
    }

    pub(crate) fn cache_mut(&mut self) -> &mut JobCache {
        &mut self.cache
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub(crate) fn bookmarks_mut(&mut self) -> &mut BookmarkSet {
        &mut self.bookmarks
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn recommended_ids(&self) -> &[JobId] {
        &self.recommended
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Address of the page currently shown, as shared by the share action.
    pub fn current_url(&self) -> String {
        page_url(&self.site_url, self.route)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.mark_dirty();
    }

    pub(crate) fn set_load_error(&mut self, message: Option<String>) {
        self.load_error = message;
        self.mark_dirty();
    }

    pub(crate) fn set_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        if self.route != route {
            self.route = route;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_bookmarks(&mut self, bookmarks: BookmarkSet) {
        self.bookmarks = bookmarks;
        self.mark_dirty();
    }

    pub(crate) fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.recompute_recommendations();
    }

    /// Installs a fresh job list: new cards for new jobs, existing cards
    /// re-synced, cards for vanished jobs dropped.
    pub(crate) fn apply_jobs(&mut self, jobs: Vec<Job>) {
        self.cache.replace_all(jobs);

        let mut cards = BTreeMap::new();
        for job in self.cache.jobs() {
            let card = match self.cards.remove(&job.id) {
                Some(mut existing) => {
                    existing.sync_from_job(job);
                    existing
                }
                None => CardState::from_job(job),
            };
            cards.insert(job.id, card);
        }
        self.cards = cards;
        self.recompute_recommendations();
    }

    fn recompute_recommendations(&mut self) {
        self.recommended = recommend(self.cache.jobs(), &self.profile)
            .into_iter()
            .map(|job| job.id)
            .collect();
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
