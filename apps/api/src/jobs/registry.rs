//! In-memory job-application registry.
//!
//! One instance per process, owned by `AppState` and handed to handlers.
//! Every operation is synchronous and total: unknown ids are silent no-ops,
//! free-text fields are stored as given.

use std::collections::BTreeSet;

use chrono::Utc;
use tracing::debug;

use crate::jobs::seed::seed_jobs;
use crate::models::job::{JobId, JobRecord, JobStatus, NewJob};

#[derive(Debug, Default)]
pub struct JobRegistry {
    /// Most-recent-first.
    jobs: Vec<JobRecord>,
    /// Independent of `jobs`; may hold ids of deleted records.
    saved: BTreeSet<JobId>,
}

impl JobRegistry {
    /// Registry holding the three starter records and nothing saved.
    pub fn seeded() -> Self {
        JobRegistry {
            jobs: seed_jobs(),
            saved: BTreeSet::new(),
        }
    }

    /// Creates a record from `fields` and puts it at the head of the listing.
    pub fn add_job(&mut self, fields: NewJob) -> JobRecord {
        let NewJob {
            company,
            title,
            location,
            salary,
            status,
            job_url,
        } = fields;

        let record = JobRecord {
            id: JobId::generate(),
            company,
            title,
            location,
            salary,
            status,
            created_age_days: 0,
            job_url,
            created_at: Utc::now(),
        };
        debug!(job_id = %record.id, company = %record.company, "job added");

        self.jobs.insert(0, record.clone());
        record
    }

    /// Sets the status of the matching record. Returns `false` when no
    /// record has `id`, in which case nothing changes.
    pub fn update_status(&mut self, id: JobId, status: JobStatus) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                debug!(job_id = %id, from = %job.status, to = %status, "job status updated");
                job.status = status;
                true
            }
            None => {
                debug!(job_id = %id, "status update for unknown job ignored");
                false
            }
        }
    }

    /// Removes the matching record for good. Saved ids are left alone.
    pub fn delete_job(&mut self, id: JobId) -> Option<JobRecord> {
        let position = self.jobs.iter().position(|job| job.id == id);
        match position {
            Some(index) => {
                debug!(job_id = %id, "job deleted");
                Some(self.jobs.remove(index))
            }
            None => {
                debug!(job_id = %id, "delete for unknown job ignored");
                None
            }
        }
    }

    /// Marks `id` as saved. Returns `true` if it was not saved before.
    /// The id is not checked against the listing.
    pub fn save_job(&mut self, id: JobId) -> bool {
        let inserted = self.saved.insert(id);
        debug!(job_id = %id, inserted, "job saved");
        inserted
    }

    /// Clears the saved mark. Returns `true` if the id was saved.
    pub fn unsave_job(&mut self, id: JobId) -> bool {
        let removed = self.saved.remove(&id);
        debug!(job_id = %id, removed, "job unsaved");
        removed
    }

    pub fn list_jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn get_job(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn saved_job_ids(&self) -> &BTreeSet<JobId> {
        &self.saved
    }

    pub fn is_saved(&self, id: JobId) -> bool {
        self.saved.contains(&id)
    }
}
