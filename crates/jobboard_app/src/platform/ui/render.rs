use std::fmt::Write;

use chrono::{DateTime, Utc};
use jobboard_core::{AppViewModel, JobCardView, Route, Section};

/// Renders the whole board as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    render_navbar(&mut out, view);

    match view.route {
        Route::Home => render_board(&mut out, view),
        Route::Profile => render_profile(&mut out, view),
    }
    out
}

fn render_navbar(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "=== {} ===  [home] [profile]", view.brand);
    let _ = writeln!(out, "{}", view.page_url);
}

fn render_board(out: &mut String, view: &AppViewModel) {
    let (all, recommended) = match view.section {
        Section::All => ("[All Jobs]", " Recommended "),
        Section::Recommended => (" All Jobs ", "[Recommended]"),
    };
    let _ = writeln!(
        out,
        "{all} {recommended}   jobs: {} | recommended: {} | bookmarks: {}",
        view.total_jobs, view.recommended_count, view.bookmark_count
    );
    if view.loading {
        let _ = writeln!(out, "Loading jobs...");
    }
    if let Some(error) = &view.load_error {
        let _ = writeln!(out, "Could not load jobs: {error}");
    }
    if view.cards.is_empty() && !view.loading {
        let _ = writeln!(out, "No jobs to show.");
    }
    for card in &view.cards {
        out.push('\n');
        render_card(out, card);
    }
}

fn render_card(out: &mut String, card: &JobCardView) {
    let bookmark = if card.bookmarked { "★" } else { "☆" };
    let heart = if card.animating { "♥*" } else { "♥" };
    let _ = writeln!(
        out,
        "#{} {} {} at {}",
        card.job_id, bookmark, card.title, card.company
    );
    let _ = writeln!(
        out,
        "   {} | {} | {} | {} yrs | posted {}",
        card.location,
        card.employment_type,
        card.category,
        card.experience_years,
        format_date(card.posted_date)
    );
    if let Some(salary) = &card.salary {
        let _ = writeln!(out, "   Salary: {salary}");
    }
    if !card.required_skills.is_empty() {
        let _ = writeln!(out, "   Skills: {}", card.required_skills.join(", "));
    }
    let _ = writeln!(out, "   {}", card.description);
    let _ = writeln!(
        out,
        "   {heart} {}{}   comments: {}",
        card.like_count,
        if card.liking { " (saving)" } else { "" },
        card.comment_count
    );

    if card.comments_open {
        for comment in &card.comments {
            let _ = writeln!(
                out,
                "     - {} ({}): {}",
                comment.author,
                format_date(comment.date),
                comment.text
            );
        }
        let status = if card.posting_comment { " (posting)" } else { "" };
        let _ = writeln!(out, "     draft: \"{}\"{status}", card.draft);
    }
}

fn render_profile(out: &mut String, view: &AppViewModel) {
    let profile = &view.profile;
    let _ = writeln!(out, "Profile");
    let _ = writeln!(out, "  Skills:       {}", profile.skills.join(", "));
    let _ = writeln!(out, "  Experience:   {}", profile.experience);
    let _ = writeln!(out, "  Education:    {}", profile.education);
    let _ = writeln!(out, "  Career goals: {}", profile.career_goals);
}

fn format_date(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
