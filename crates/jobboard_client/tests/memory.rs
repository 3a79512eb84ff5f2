use jobboard_client::{sample_jobs, FailureKind, InMemoryJobService, JobService};
use jobboard_core::NewComment;

#[tokio::test]
async fn like_increments_and_returns_full_job() {
    let service = InMemoryJobService::with_sample_jobs();
    let before = sample_jobs()[0].like_count;

    let job = service.like_job(1).await.expect("like");
    assert_eq!(job.like_count, before + 1);

    let jobs = service.fetch_jobs().await.expect("jobs");
    assert_eq!(jobs[0].like_count, before + 1);
}

#[tokio::test]
async fn comment_is_appended_to_canonical_list() {
    let service = InMemoryJobService::with_sample_jobs();
    let comment = NewComment {
        text: "Applied today".to_string(),
        author: "Current User".to_string(),
        date: 1_800_000_000_000,
    };

    let job = service.add_comment(2, &comment).await.expect("comment");
    assert_eq!(job.comments.len(), 1);
    assert_eq!(job.comments[0].text, "Applied today");
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let service = InMemoryJobService::new(Vec::new());
    let err = service.like_job(99).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NotFound { job_id: 99 });
    assert_eq!(err.message, "Job not found");
}

#[test]
fn sample_jobs_have_unique_ids() {
    let jobs = sample_jobs();
    let mut ids: Vec<_> = jobs.iter().map(|job| job.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), jobs.len());
}
