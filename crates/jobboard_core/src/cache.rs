use crate::model::{Comment, Job, JobId};

/// Single source of truth for job records shown on every card.
///
/// Keeps the server's ordering; lookups are by id. Patches are
/// last-writer-wins and silently skip jobs that are no longer cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobCache {
    jobs: Vec<Job>,
}

impl JobCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached list, keeping the first record of any duplicated id.
    pub fn replace_all(&mut self, jobs: Vec<Job>) {
        let mut deduped: Vec<Job> = Vec::with_capacity(jobs.len());
        for job in jobs {
            if deduped.iter().any(|existing| existing.id == job.id) {
                continue;
            }
            deduped.push(job);
        }
        self.jobs = deduped;
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, job_id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn contains(&self, job_id: JobId) -> bool {
        self.get(job_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Applies `patch` to the cached job with `job_id`. Returns false when
    /// the job is not cached.
    pub fn patch(&mut self, job_id: JobId, patch: impl FnOnce(&mut Job)) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == job_id) {
            Some(job) => {
                patch(job);
                true
            }
            None => false,
        }
    }

    pub fn patch_like_count(&mut self, job_id: JobId, like_count: u64) -> bool {
        self.patch(job_id, |job| job.like_count = like_count)
    }

    pub fn patch_comments(&mut self, job_id: JobId, comments: Vec<Comment>) -> bool {
        self.patch(job_id, |job| job.comments = comments)
    }
}
