use serde::Deserialize;

use crate::models::job::{JobRecord, JobStatus};

/// View-side filtering over a registry snapshot. Both criteria are optional
/// and combine with AND; snapshot order is kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    /// Case-insensitive substring matched against company or title.
    #[serde(rename = "q")]
    pub search: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobRecord) -> bool {
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                job.company.to_lowercase().contains(&needle)
                    || job.title.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}
