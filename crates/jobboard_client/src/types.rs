use std::fmt;

use jobboard_core::{Job, JobId};

/// Requests accepted by [`crate::ClientHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    FetchJobs,
    Like { job_id: JobId },
    AddComment {
        job_id: JobId,
        comment: jobboard_core::NewComment,
    },
}

/// Outcome of a [`ClientCommand`], delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    JobsFetched(Result<Vec<Job>, ClientError>),
    Liked {
        job_id: JobId,
        result: Result<Job, ClientError>,
    },
    Commented {
        job_id: JobId,
        result: Result<Job, ClientError>,
    },
}

impl ClientEvent {
    /// The event a command resolves to when it fails before reaching the
    /// service.
    pub fn failed(command: ClientCommand, error: ClientError) -> Self {
        match command {
            ClientCommand::FetchJobs => ClientEvent::JobsFetched(Err(error)),
            ClientCommand::Like { job_id } => ClientEvent::Liked {
                job_id,
                result: Err(error),
            },
            ClientCommand::AddComment { job_id, .. } => ClientEvent::Commented {
                job_id,
                result: Err(error),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    NotFound { job_id: JobId },
    Timeout,
    Decode,
    Network,
    /// The background runtime is gone.
    Disconnected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::NotFound { job_id } => write!(f, "job {job_id} not found"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Disconnected => write!(f, "client disconnected"),
        }
    }
}
