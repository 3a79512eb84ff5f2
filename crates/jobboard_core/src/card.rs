use crate::comments::{
    filter_valid_comments, next_like_count, propose_comment, rollback_like_count, ValidationError,
};
use crate::model::{Comment, Job, NewComment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikePhase {
    #[default]
    Idle,
    Liking,
}

/// Outcome of a submit attempt on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Send(NewComment),
    /// A previous submission has not resolved yet.
    AlreadyInFlight,
}

/// Interaction state held by one job card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardState {
    like_count: u64,
    animating: bool,
    like_phase: LikePhase,
    comment_in_flight: bool,
    comments_open: bool,
    draft: String,
    comments: Vec<Comment>,
}

impl CardState {
    pub fn from_job(job: &Job) -> Self {
        Self {
            like_count: job.like_count,
            comments: filter_valid_comments(&job.comments),
            ..Self::default()
        }
    }

    /// Takes a freshly fetched record as canonical unless a mutation is
    /// outstanding, in which case its response will reconcile the card.
    pub fn sync_from_job(&mut self, job: &Job) {
        if self.like_phase == LikePhase::Idle {
            self.like_count = job.like_count;
        }
        if !self.comment_in_flight {
            self.comments = filter_valid_comments(&job.comments);
        }
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn like_phase(&self) -> LikePhase {
        self.like_phase
    }

    pub fn is_comment_in_flight(&self) -> bool {
        self.comment_in_flight
    }

    pub fn comments_open(&self) -> bool {
        self.comments_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Optimistically counts the like. Returns false, leaving the card
    /// untouched, while an earlier like is still unresolved.
    pub fn begin_like(&mut self) -> bool {
        if self.like_phase == LikePhase::Liking {
            return false;
        }
        self.like_phase = LikePhase::Liking;
        self.like_count = next_like_count(self.like_count);
        self.animating = true;
        true
    }

    /// The server count replaces whatever the optimistic path guessed.
    /// The animation flag stays set until the pulse finishes.
    pub fn like_succeeded(&mut self, server_like_count: u64) {
        self.like_phase = LikePhase::Idle;
        self.like_count = server_like_count;
    }

    pub fn like_failed(&mut self) {
        if self.like_phase == LikePhase::Liking {
            self.like_count = rollback_like_count(self.like_count);
        }
        self.like_phase = LikePhase::Idle;
        self.animating = false;
    }

    pub fn finish_animation(&mut self) {
        if self.like_phase == LikePhase::Idle {
            self.animating = false;
        }
    }

    pub fn toggle_comments(&mut self) {
        self.comments_open = !self.comments_open;
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn begin_comment(&mut self, now_millis: i64) -> Result<SubmitOutcome, ValidationError> {
        let comment = propose_comment(&self.draft, now_millis)?;
        if self.comment_in_flight {
            return Ok(SubmitOutcome::AlreadyInFlight);
        }
        self.comment_in_flight = true;
        Ok(SubmitOutcome::Send(comment))
    }

    /// Replaces the displayed list with the server's (validated) list and
    /// clears the draft. Returns the list that is now displayed.
    pub fn comment_succeeded(&mut self, server_comments: &[Comment]) -> Vec<Comment> {
        self.comment_in_flight = false;
        self.comments = filter_valid_comments(server_comments);
        self.draft.clear();
        self.comments.clone()
    }

    /// Keeps the draft so the user can retry.
    pub fn comment_failed(&mut self) {
        self.comment_in_flight = false;
    }
}
