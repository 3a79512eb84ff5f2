use std::sync::Mutex;

use jobboard_core::{Comment, ExperienceRequired, Job, JobCategory, JobId, NewComment};

use crate::{ClientError, FailureKind, JobService};

/// Offline backend holding jobs in process memory.
///
/// Behaves like the HTTP API: mutations answer with the full updated job.
#[derive(Debug, Default)]
pub struct InMemoryJobService {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobService {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
        }
    }

    /// Service seeded with [`sample_jobs`].
    pub fn with_sample_jobs() -> Self {
        Self::new(sample_jobs())
    }

    fn with_job<T>(
        &self,
        job_id: JobId,
        apply: impl FnOnce(&mut Job) -> T,
    ) -> Result<T, ClientError> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| ClientError::new(FailureKind::Disconnected, "job store poisoned"))?;
        match jobs.iter_mut().find(|job| job.id == job_id) {
            Some(job) => Ok(apply(job)),
            None => Err(ClientError::new(
                FailureKind::NotFound { job_id },
                "Job not found",
            )),
        }
    }
}

#[async_trait::async_trait]
impl JobService for InMemoryJobService {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.jobs
            .lock()
            .map(|jobs| jobs.clone())
            .map_err(|_| ClientError::new(FailureKind::Disconnected, "job store poisoned"))
    }

    async fn like_job(&self, job_id: JobId) -> Result<Job, ClientError> {
        self.with_job(job_id, |job| {
            job.like_count = job.like_count.saturating_add(1);
            job.clone()
        })
    }

    async fn add_comment(&self, job_id: JobId, comment: &NewComment) -> Result<Job, ClientError> {
        self.with_job(job_id, |job| {
            job.comments.push(Comment::from(comment.clone()));
            job.clone()
        })
    }
}

/// Small built-in board used when no API or seed file is configured.
pub fn sample_jobs() -> Vec<Job> {
    let posted = 1_717_200_000_000;
    vec![
        Job {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "Brightside Labs".to_string(),
            location: "Berlin".to_string(),
            employment_type: "Full-time".to_string(),
            description: "Build accessible dashboards with React and TypeScript.".to_string(),
            posted_date: posted,
            required_skills: vec!["ReactJS".to_string(), "TypeScript".to_string()],
            like_count: 12,
            experience_required: ExperienceRequired { years: 2.0 },
            category: None,
            salary: Some("€60k - €75k".to_string()),
            comments: vec![Comment::new(
                "Great team, fast interview process.",
                "Priya",
                posted + 3_600_000,
            )],
        },
        Job {
            id: 2,
            title: "Graduate Data Analyst".to_string(),
            company: "Northwind Insights".to_string(),
            location: "Manchester".to_string(),
            employment_type: "Full-time".to_string(),
            description: "Turn sales data into weekly reports.".to_string(),
            posted_date: posted - 86_400_000,
            required_skills: vec!["SQL".to_string(), "Excel".to_string()],
            like_count: 4,
            experience_required: ExperienceRequired { years: 0.0 },
            category: None,
            salary: None,
            comments: Vec::new(),
        },
        Job {
            id: 3,
            title: "Backend Engineer".to_string(),
            company: "Harbor Systems".to_string(),
            location: "Anywhere".to_string(),
            employment_type: "Contract".to_string(),
            description: "Own the payments service written in Rust.".to_string(),
            posted_date: posted - 2 * 86_400_000,
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            like_count: 21,
            experience_required: ExperienceRequired { years: 4.0 },
            category: Some(JobCategory::Remote),
            salary: Some("$90/h".to_string()),
            comments: Vec::new(),
        },
        Job {
            id: 4,
            title: "UX Research Intern".to_string(),
            company: "Cobalt Studio".to_string(),
            location: "Lisbon".to_string(),
            employment_type: "Internship".to_string(),
            description: "Run user interviews and synthesise findings.".to_string(),
            posted_date: posted - 3 * 86_400_000,
            required_skills: vec!["Figma".to_string()],
            like_count: 0,
            experience_required: ExperienceRequired { years: 0.0 },
            category: Some(JobCategory::Internship),
            salary: None,
            comments: Vec::new(),
        },
    ]
}
