//! Keyword-overlap recommendation filter.
//!
//! A job is recommended when any profile keyword occurs *inside* any job
//! keyword. Matching is plain substring containment on lower-cased text, so
//! `"react"` also matches `"reactive"`. There is no scoring; the result is
//! the input list with non-matching jobs dropped.

use crate::model::{Job, UserProfile};

/// Flattens the profile into lower-cased keywords.
///
/// Skills are taken whole; the free-text fields are split on whitespace.
/// Empty keywords are discarded since they would match every job.
pub fn profile_keywords(profile: &UserProfile) -> Vec<String> {
    let free_text = [
        profile.experience.as_str(),
        profile.education.as_str(),
        profile.career_goals.as_str(),
    ];

    profile
        .skills
        .iter()
        .map(|skill| skill.trim())
        .chain(free_text.into_iter().flat_map(str::split_whitespace))
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn job_keywords(job: &Job) -> Vec<String> {
    job.required_skills
        .iter()
        .map(String::as_str)
        .chain([
            job.title.as_str(),
            job.description.as_str(),
            job.employment_type.as_str(),
            job.category().as_str(),
        ])
        .map(str::to_lowercase)
        .collect()
}

fn matches_keywords(profile_keywords: &[String], job: &Job) -> bool {
    let job_keywords = job_keywords(job);
    profile_keywords.iter().any(|keyword| {
        job_keywords
            .iter()
            .any(|job_keyword| job_keyword.contains(keyword.as_str()))
    })
}

pub fn matches_profile(job: &Job, profile: &UserProfile) -> bool {
    matches_keywords(&profile_keywords(profile), job)
}

/// Order-preserving subset of `jobs` that overlap the profile.
pub fn recommend<'a>(jobs: &'a [Job], profile: &UserProfile) -> Vec<&'a Job> {
    let keywords = profile_keywords(profile);
    if keywords.is_empty() {
        return Vec::new();
    }
    jobs.iter()
        .filter(|job| matches_keywords(&keywords, job))
        .collect()
}
