use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::jobs::JobFilter;
use crate::models::job::{JobId, JobRecord, JobStatus, NewJob};
use crate::state::AppState;

/// Filtered listing plus the full saved-set for "saved" indicators.
#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRecord>,
    pub saved_job_ids: Vec<JobId>,
}

/// One record with its saved mark.
#[derive(Serialize)]
pub struct JobDetailResponse {
    #[serde(flatten)]
    pub job: JobRecord,
    pub saved: bool,
}

/// Body of a status change.
#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: JobStatus,
}

/// GET /api/v1/jobs?status=&q=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<JobFilter>,
) -> Json<JobListResponse> {
    let registry = state.registry.read().await;
    let jobs = filter
        .apply(registry.list_jobs())
        .into_iter()
        .cloned()
        .collect();
    let saved_job_ids = registry.saved_job_ids().iter().copied().collect();
    Json(JobListResponse {
        jobs,
        saved_job_ids,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<JobId>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let registry = state.registry.read().await;
    let job = registry
        .get_job(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    let saved = registry.is_saved(id);
    Ok(Json(JobDetailResponse { job, saved }))
}

/// POST /api/v1/jobs
pub async fn handle_add_job(
    State(state): State<AppState>,
    AppJson(fields): AppJson<NewJob>,
) -> (StatusCode, Json<JobRecord>) {
    let record = state.registry.write().await.add_job(fields);
    (StatusCode::CREATED, Json(record))
}

/// PATCH /api/v1/jobs/:id/status
/// Unknown ids are accepted and ignored.
pub async fn handle_update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<JobId>,
    AppJson(req): AppJson<StatusUpdate>,
) -> StatusCode {
    state.registry.write().await.update_status(id, req.status);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<JobId>,
) -> StatusCode {
    state.registry.write().await.delete_job(id);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/saved-jobs
pub async fn handle_saved_jobs(State(state): State<AppState>) -> Json<Vec<JobId>> {
    let registry = state.registry.read().await;
    Json(registry.saved_job_ids().iter().copied().collect())
}

/// PUT /api/v1/jobs/:id/saved
pub async fn handle_save_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<JobId>,
) -> StatusCode {
    state.registry.write().await.save_job(id);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/jobs/:id/saved
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<JobId>,
) -> StatusCode {
    state.registry.write().await.unsave_job(id);
    StatusCode::NO_CONTENT
}
