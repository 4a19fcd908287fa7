use chrono::{Duration, Utc};

use crate::models::job::{JobId, JobRecord, JobStatus};

struct SeedJob {
    company: &'static str,
    title: &'static str,
    location: &'static str,
    salary: &'static str,
    status: JobStatus,
    age_days: u32,
}

// Most-recent-first, matching the order the registry keeps.
const SEED_JOBS: [SeedJob; 3] = [
    SeedJob {
        company: "Google",
        title: "Full Stack Engineer",
        location: "Mountain View, CA",
        salary: "$150,000 - $200,000",
        status: JobStatus::Applied,
        age_days: 2,
    },
    SeedJob {
        company: "Microsoft",
        title: "Senior React Developer",
        location: "Remote",
        salary: "$130,000 - $170,000",
        status: JobStatus::Interviewing,
        age_days: 5,
    },
    SeedJob {
        company: "Co-op Bank",
        title: "Front-End Developer",
        location: "Nairobi, Kenya",
        salary: "KES 150,000 - 220,000",
        status: JobStatus::NotStarted,
        age_days: 7,
    },
];

/// Builds the starter records every new registry begins with.
pub fn seed_jobs() -> Vec<JobRecord> {
    let now = Utc::now();
    SEED_JOBS
        .iter()
        .map(|seed| JobRecord {
            id: JobId::generate(),
            company: seed.company.to_string(),
            title: seed.title.to_string(),
            location: seed.location.to_string(),
            salary: seed.salary.to_string(),
            status: seed.status,
            created_age_days: seed.age_days,
            job_url: None,
            created_at: now - Duration::days(i64::from(seed.age_days)),
        })
        .collect()
}
