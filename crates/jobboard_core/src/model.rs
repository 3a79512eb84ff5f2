use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub type JobId = u64;

/// Author name attached to comments proposed by this client.
pub const CURRENT_USER: &str = "Current User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobCategory {
    Fresher,
    Experienced,
    Remote,
    Internship,
}

impl JobCategory {
    /// Category a job falls into when the backend does not supply one.
    pub fn from_experience_years(years: f64) -> Self {
        if years <= 1.0 {
            JobCategory::Fresher
        } else {
            JobCategory::Experienced
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobCategory::Fresher => "fresher",
            JobCategory::Experienced => "experienced",
            JobCategory::Remote => "remote",
            JobCategory::Internship => "internship",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceRequired {
    #[serde(default)]
    pub years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub posted_date: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub experience_required: ExperienceRequired,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<JobCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

impl Job {
    /// Explicit category, or the one derived from the required experience.
    pub fn category(&self) -> JobCategory {
        self.category.unwrap_or_else(|| {
            JobCategory::from_experience_years(self.experience_required.years)
        })
    }
}

/// A comment as stored on a job.
///
/// Decoding never fails on a single bad field: missing text or author decode
/// as empty and an unusable date decodes as `0`, which the validity filter
/// then rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub date: i64,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: impl Into<String>, date: i64) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            date,
        }
    }
}

/// Payload sent to the backend when the user posts a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    pub author: String,
    pub date: i64,
}

impl From<NewComment> for Comment {
    fn from(value: NewComment) -> Self {
        Comment::new(value.text, value.author, value.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub career_goals: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "JavaScript".to_string(),
            ],
            experience: "2 years of frontend development".to_string(),
            education: "Computer Science".to_string(),
            career_goals: "Frontend Developer".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMillis {
    Int(i64),
    Float(f64),
    Other(serde::de::IgnoredAny),
}

fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = match RawMillis::deserialize(deserializer)? {
        RawMillis::Int(value) => value,
        // Float-to-int `as` saturates, so huge dates clamp to `i64::MAX`.
        RawMillis::Float(value) if value.is_finite() && value > 0.0 => value.ceil() as i64,
        RawMillis::Float(_) | RawMillis::Other(_) => 0,
    };
    Ok(millis.max(0))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawText::deserialize(deserializer)? {
        RawText::Text(text) => text,
        RawText::Other(_) => String::new(),
    })
}
