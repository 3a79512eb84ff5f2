use crate::model::JobId;

/// Client-wide list of bookmarked jobs, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkSet {
    ids: Vec<JobId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: Vec<JobId>) -> Self {
        Self { ids }
    }

    pub fn is_bookmarked(&self, job_id: JobId) -> bool {
        self.ids.contains(&job_id)
    }

    /// Adds the job when absent, removes its first occurrence when present.
    /// Returns whether the job is bookmarked afterwards.
    pub fn toggle(&mut self, job_id: JobId) -> bool {
        match self.ids.iter().position(|id| *id == job_id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(job_id);
                true
            }
        }
    }

    pub fn ids(&self) -> &[JobId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
