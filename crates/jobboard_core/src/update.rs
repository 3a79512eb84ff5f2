use board_logging::{board_debug, board_info, board_warn};

use crate::bookmarks::BookmarkSet;
use crate::card::SubmitOutcome;
use crate::{AppState, Effect, JobId, Msg, SharePayload, Toast, LIKE_ANIMATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Restore { bookmarks, profile } => {
            state.set_bookmarks(BookmarkSet::from_ids(bookmarks));
            state.set_profile(profile);
            Vec::new()
        }
        Msg::RefreshRequested => {
            if state.is_loading() {
                Vec::new()
            } else {
                state.set_loading(true);
                vec![Effect::FetchJobs]
            }
        }
        Msg::JobsLoaded(jobs) => {
            board_info!("Loaded {} jobs", jobs.len());
            state.set_loading(false);
            state.set_load_error(None);
            state.apply_jobs(jobs);
            Vec::new()
        }
        Msg::JobsLoadFailed { message } => {
            board_warn!("Loading jobs failed: {}", message);
            state.set_loading(false);
            state.set_load_error(Some(message.clone()));
            vec![Effect::Notify(Toast::destructive("Error", message))]
        }
        Msg::ProfileUpdated(profile) => {
            state.set_profile(profile.clone());
            vec![Effect::PersistProfile(profile)]
        }
        Msg::SectionSelected(section) => {
            state.set_section(section);
            Vec::new()
        }
        Msg::Navigate(route) => {
            state.set_route(route);
            Vec::new()
        }
        Msg::LikeClicked { job_id } => like_clicked(&mut state, job_id),
        Msg::LikeSucceeded { job_id, job } => {
            state.cache_mut().patch_like_count(job_id, job.like_count);
            state.mark_dirty();
            match state.card_mut(job_id) {
                Some(card) => {
                    card.like_succeeded(job.like_count);
                    vec![Effect::ScheduleAnimationEnd {
                        job_id,
                        delay: LIKE_ANIMATION,
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::LikeFailed { job_id, message } => {
            board_warn!("Like failed for job {}: {}", job_id, message);
            if let Some(card) = state.card_mut(job_id) {
                card.like_failed();
                state.mark_dirty();
            }
            vec![Effect::Notify(Toast::destructive(
                "Error",
                "Failed to like the job. Please try again.",
            ))]
        }
        Msg::LikeAnimationFinished { job_id } => {
            if let Some(card) = state.card_mut(job_id) {
                card.finish_animation();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CommentsToggled { job_id } => {
            if let Some(card) = state.card_mut(job_id) {
                card.toggle_comments();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CommentDraftChanged { job_id, text } => {
            if let Some(card) = state.card_mut(job_id) {
                card.set_draft(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CommentSubmitted { job_id, now_millis } => {
            comment_submitted(&mut state, job_id, now_millis)
        }
        Msg::CommentPosted { job_id, job } => {
            let comments = match state.card_mut(job_id) {
                Some(card) => card.comment_succeeded(&job.comments),
                None => crate::filter_valid_comments(&job.comments),
            };
            state.cache_mut().patch_comments(job_id, comments);
            state.mark_dirty();
            vec![Effect::Notify(Toast::info(
                "Success",
                "Your comment has been posted successfully",
            ))]
        }
        Msg::CommentFailed { job_id, message } => {
            board_warn!("Comment failed for job {}: {}", job_id, message);
            if let Some(card) = state.card_mut(job_id) {
                card.comment_failed();
                state.mark_dirty();
            }
            vec![Effect::Notify(Toast::destructive("Error", message))]
        }
        Msg::BookmarkToggled { job_id } => {
            let bookmarked = state.bookmarks_mut().toggle(job_id);
            state.mark_dirty();
            let toast = if bookmarked {
                Toast::info("Job bookmarked", "Job has been added to your bookmarks")
            } else {
                Toast::info("Bookmark removed", "Job has been removed from your bookmarks")
            };
            vec![
                Effect::PersistBookmarks(state.bookmarks().ids().to_vec()),
                Effect::Notify(toast),
            ]
        }
        Msg::ShareClicked { job_id } => match state.cache().get(job_id) {
            Some(job) => {
                let headline = format!("{} at {}", job.title, job.company);
                let payload = SharePayload {
                    text: format!("Check out this job opportunity: {headline}"),
                    title: headline,
                    url: state.current_url(),
                };
                vec![Effect::Share { job_id, payload }]
            }
            None => Vec::new(),
        },
        Msg::ShareUnavailable { job_id, url } => {
            board_debug!("Share unavailable for job {}, copying link", job_id);
            vec![
                Effect::CopyToClipboard { text: url },
                Effect::Notify(Toast::info(
                    "Link copied!",
                    "Job post link has been copied to clipboard",
                )),
            ]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn like_clicked(state: &mut AppState, job_id: JobId) -> Vec<Effect> {
    let Some(card) = state.card_mut(job_id) else {
        return Vec::new();
    };
    if !card.begin_like() {
        board_debug!("Ignoring like for job {}: previous like in flight", job_id);
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::LikeJob { job_id }]
}

fn comment_submitted(state: &mut AppState, job_id: JobId, now_millis: i64) -> Vec<Effect> {
    let Some(card) = state.card_mut(job_id) else {
        return Vec::new();
    };
    match card.begin_comment(now_millis) {
        Ok(SubmitOutcome::Send(comment)) => {
            state.mark_dirty();
            vec![Effect::AddComment { job_id, comment }]
        }
        Ok(SubmitOutcome::AlreadyInFlight) => {
            board_debug!("Ignoring comment for job {}: previous one in flight", job_id);
            Vec::new()
        }
        Err(_) => vec![Effect::Notify(Toast::destructive(
            "Error",
            "Please enter a comment before posting",
        ))],
    }
}
