use std::time::Duration;

use board_logging::{board_debug, board_info};
use jobboard_core::{Job, JobId, NewComment};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{ClientError, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Root of the job API, e.g. `https://api.example.com/v1/`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Remote job source and mutation endpoint.
///
/// Every mutation answers with the full updated job, which the caller
/// treats as canonical.
#[async_trait::async_trait]
pub trait JobService: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError>;

    async fn like_job(&self, job_id: JobId) -> Result<Job, ClientError>;

    async fn add_comment(&self, job_id: JobId, comment: &NewComment) -> Result<Job, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobService {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestJobService {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base = parse_base(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobService for ReqwestJobService {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let url = self.endpoint("jobs")?;
        board_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let jobs: Vec<Job> = decode(response).await?;
        board_info!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    async fn like_job(&self, job_id: JobId) -> Result<Job, ClientError> {
        let url = self.endpoint(&format!("jobs/{job_id}/like"))?;
        board_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }

    async fn add_comment(&self, job_id: JobId, comment: &NewComment) -> Result<Job, ClientError> {
        let url = self.endpoint(&format!("jobs/{job_id}/comments"))?;
        board_debug!("POST {} text_len={}", url, comment.text.len());
        let response = self
            .client
            .post(url)
            .json(comment)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }
}

/// Parses the API root, adding the trailing slash `Url::join` needs to keep
/// the last path segment.
fn parse_base(raw: &str) -> Result<Url, ClientError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(ClientError::new(
            FailureKind::HttpStatus(status.as_u16()),
            error_message(status, &body),
        ));
    }
    serde_json::from_str(&body).map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| status.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
