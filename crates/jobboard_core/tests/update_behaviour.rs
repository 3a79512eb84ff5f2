use std::sync::Once;

use jobboard_core::{
    update, AppState, Comment, Effect, ExperienceRequired, Job, Msg, NewComment, Severity, Toast,
    CURRENT_USER, LIKE_ANIMATION,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn job(id: u64, like_count: u64, comments: Vec<Comment>) -> Job {
    Job {
        id,
        title: format!("Job {id}"),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        description: "Build things".to_string(),
        posted_date: 1_700_000_000_000,
        required_skills: vec!["Rust".to_string()],
        like_count,
        experience_required: ExperienceRequired { years: 2.0 },
        category: None,
        salary: None,
        comments,
    }
}

fn loaded(jobs: Vec<Job>) -> AppState {
    let (mut state, _) = update(AppState::new(), Msg::JobsLoaded(jobs));
    state.consume_dirty();
    state
}

fn like_count(state: &AppState, job_id: u64) -> u64 {
    state
        .view()
        .cards
        .iter()
        .find(|card| card.job_id == job_id)
        .expect("card")
        .like_count
}

#[test]
fn like_is_counted_optimistically_and_requests_mutation() {
    init_logging();
    let state = loaded(vec![job(1, 10, Vec::new())]);

    let (mut state, effects) = update(state, Msg::LikeClicked { job_id: 1 });

    assert_eq!(effects, vec![Effect::LikeJob { job_id: 1 }]);
    assert_eq!(like_count(&state, 1), 11);
    assert!(state.view().cards[0].animating);
    assert!(state.view().cards[0].liking);
    assert!(state.consume_dirty());
}

#[test]
fn successful_like_takes_server_count_and_schedules_animation_end() {
    init_logging();
    let state = loaded(vec![job(1, 10, Vec::new())]);
    let (state, _) = update(state, Msg::LikeClicked { job_id: 1 });

    // Someone else liked in the meantime; the server is authoritative.
    let (state, effects) = update(
        state,
        Msg::LikeSucceeded {
            job_id: 1,
            job: job(1, 13, Vec::new()),
        },
    );

    assert_eq!(like_count(&state, 1), 13);
    assert_eq!(state.cache().get(1).unwrap().like_count, 13);
    assert_eq!(
        effects,
        vec![Effect::ScheduleAnimationEnd {
            job_id: 1,
            delay: LIKE_ANIMATION,
        }]
    );
    assert!(state.view().cards[0].animating);

    let (state, effects) = update(state, Msg::LikeAnimationFinished { job_id: 1 });
    assert!(effects.is_empty());
    assert!(!state.view().cards[0].animating);
}

#[test]
fn failed_like_rolls_back_and_notifies() {
    init_logging();
    let state = loaded(vec![job(1, 10, Vec::new())]);
    let before = like_count(&state, 1);

    let (state, _) = update(state, Msg::LikeClicked { job_id: 1 });
    let (state, effects) = update(
        state,
        Msg::LikeFailed {
            job_id: 1,
            message: "503 Service Unavailable".to_string(),
        },
    );

    assert_eq!(like_count(&state, 1), before);
    assert!(!state.view().cards[0].animating);
    assert_eq!(state.cache().get(1).unwrap().like_count, 10);
    assert_eq!(
        effects,
        vec![Effect::Notify(Toast::destructive(
            "Error",
            "Failed to like the job. Please try again."
        ))]
    );
}

#[test]
fn second_like_while_in_flight_is_ignored() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new())]);
    let (state, first) = update(state, Msg::LikeClicked { job_id: 1 });
    let (mut state, second) = update(state, Msg::LikeClicked { job_id: 1 });

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(like_count(&state, 1), 1);
    state.consume_dirty();

    let (state, _) = update(
        state,
        Msg::LikeSucceeded {
            job_id: 1,
            job: job(1, 1, Vec::new()),
        },
    );
    let (_state, third) = update(state, Msg::LikeClicked { job_id: 1 });
    assert_eq!(third, vec![Effect::LikeJob { job_id: 1 }]);
}

#[test]
fn like_on_other_card_is_independent() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new()), job(2, 5, Vec::new())]);
    let (state, _) = update(state, Msg::LikeClicked { job_id: 1 });
    let (state, effects) = update(state, Msg::LikeClicked { job_id: 2 });

    assert_eq!(effects, vec![Effect::LikeJob { job_id: 2 }]);
    assert_eq!(like_count(&state, 1), 1);
    assert_eq!(like_count(&state, 2), 6);
}

#[test]
fn late_like_response_for_vanished_card_is_safe() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new())]);
    let (state, _) = update(state, Msg::LikeClicked { job_id: 1 });
    let (state, _) = update(state, Msg::JobsLoaded(vec![job(2, 0, Vec::new())]));

    let (state, effects) = update(
        state,
        Msg::LikeSucceeded {
            job_id: 1,
            job: job(1, 1, Vec::new()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.card(1).is_none());
    assert!(state.cache().get(1).is_none());

    let (_state, effects) = update(state, Msg::LikeAnimationFinished { job_id: 1 });
    assert!(effects.is_empty());
}

#[test]
fn empty_draft_notifies_without_network_call() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new())]);
    let (state, _) = update(
        state,
        Msg::CommentDraftChanged {
            job_id: 1,
            text: "   \n ".to_string(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::CommentSubmitted {
            job_id: 1,
            now_millis: 1,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify(Toast::destructive(
            "Error",
            "Please enter a comment before posting"
        ))]
    );
    assert!(!state.card(1).unwrap().is_comment_in_flight());
}

#[test]
fn comment_submission_sends_trimmed_draft() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new())]);
    let (state, _) = update(
        state,
        Msg::CommentDraftChanged {
            job_id: 1,
            text: "  Looks great  ".to_string(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::CommentSubmitted {
            job_id: 1,
            now_millis: 1_700_000_000_500,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::AddComment {
            job_id: 1,
            comment: NewComment {
                text: "Looks great".to_string(),
                author: CURRENT_USER.to_string(),
                date: 1_700_000_000_500,
            },
        }]
    );
    // Provisional until the server answers: nothing is appended locally.
    assert!(state.card(1).unwrap().comments().is_empty());
    assert_eq!(state.card(1).unwrap().draft(), "  Looks great  ");

    let (_state, again) = update(
        state,
        Msg::CommentSubmitted {
            job_id: 1,
            now_millis: 1_700_000_000_600,
        },
    );
    assert!(again.is_empty());
}

#[test]
fn posted_comment_replaces_list_with_filtered_server_list() {
    init_logging();
    let existing = Comment::new("First", "Ann", 1);
    let state = loaded(vec![job(1, 0, vec![existing.clone()])]);
    let (state, _) = update(
        state,
        Msg::CommentDraftChanged {
            job_id: 1,
            text: "Second".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CommentSubmitted {
            job_id: 1,
            now_millis: 2,
        },
    );

    let server_comments = vec![
        existing,
        Comment::new("", "Ghost", 3),
        Comment::new("Second", CURRENT_USER, 2),
    ];
    let (state, effects) = update(
        state,
        Msg::CommentPosted {
            job_id: 1,
            job: job(1, 0, server_comments),
        },
    );

    let expected = vec![
        Comment::new("First", "Ann", 1),
        Comment::new("Second", CURRENT_USER, 2),
    ];
    let card = state.card(1).unwrap();
    assert_eq!(card.comments(), expected.as_slice());
    assert_eq!(card.draft(), "");
    assert!(!card.is_comment_in_flight());
    assert_eq!(state.cache().get(1).unwrap().comments, expected);
    assert_eq!(
        effects,
        vec![Effect::Notify(Toast::info(
            "Success",
            "Your comment has been posted successfully"
        ))]
    );
}

#[test]
fn failed_comment_keeps_draft_and_reports_message() {
    init_logging();
    let state = loaded(vec![job(1, 0, Vec::new())]);
    let (state, _) = update(
        state,
        Msg::CommentDraftChanged {
            job_id: 1,
            text: "Retry me".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CommentSubmitted {
            job_id: 1,
            now_millis: 5,
        },
    );
    let (state, effects) = update(
        state,
        Msg::CommentFailed {
            job_id: 1,
            message: "Job not found".to_string(),
        },
    );

    assert_eq!(state.card(1).unwrap().draft(), "Retry me");
    assert!(!state.card(1).unwrap().is_comment_in_flight());
    match effects.as_slice() {
        [Effect::Notify(toast)] => {
            assert_eq!(toast.severity, Severity::Destructive);
            assert_eq!(toast.description, "Job not found");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn initial_comments_are_filtered() {
    init_logging();
    let state = loaded(vec![job(
        1,
        0,
        vec![Comment::new("ok", "Ann", 1), Comment::new("bad", "", 1)],
    )]);
    let (state, _) = update(state, Msg::CommentsToggled { job_id: 1 });

    let view = state.view();
    let card = &view.cards[0];
    assert!(card.comments_open);
    assert_eq!(card.comment_count, 1);
    assert_eq!(card.comments, vec![Comment::new("ok", "Ann", 1)]);

    let (state, _) = update(state, Msg::CommentsToggled { job_id: 1 });
    let view = state.view();
    let card = &view.cards[0];
    assert!(!card.comments_open);
    assert_eq!(card.comment_count, 1);
    assert!(card.comments.is_empty());
}
