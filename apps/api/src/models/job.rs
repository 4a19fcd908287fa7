use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a tracked job application.
///
/// Backed by a time-ordered UUID (v7): the `uuid` crate pairs the millisecond
/// timestamp with a per-process counter, so two ids minted in the same tick
/// are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn generate() -> Self {
        JobId(Uuid::now_v7())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for JobId {
    fn from(id: Uuid) -> Self {
        JobId(id)
    }
}

/// Pipeline stage of an application. Any stage may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    NotStarted,
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "NotStarted",
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offered => "Offered",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub company: String,
    pub title: String,
    pub location: String,
    pub salary: String, // free-text range, never parsed
    pub status: JobStatus,
    /// Age in days when the record was created. A snapshot, not a live counter.
    pub created_age_days: u32,
    pub job_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new record. Nothing here is validated;
/// required-field checks belong to whoever collects the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    pub status: JobStatus,
    #[serde(default)]
    pub job_url: Option<String>,
}
