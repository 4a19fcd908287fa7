pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job tracker
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_add_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job).delete(jobs::handle_delete_job),
        )
        .route("/api/v1/jobs/:id/status", patch(jobs::handle_update_status))
        .route(
            "/api/v1/jobs/:id/saved",
            put(jobs::handle_save_job).delete(jobs::handle_unsave_job),
        )
        .route("/api/v1/saved-jobs", get(jobs::handle_saved_jobs))
        // Simulated auth
        .route("/api/v1/auth/sign-in", post(auth::handle_sign_in))
        .route("/api/v1/auth/sign-up", post(auth::handle_sign_up))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(Config {
            auth_delay: Duration::ZERO,
            ..Config::default()
        })
    }

    async fn send(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = build_router(state.clone())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn companies(list: &Value) -> Vec<String> {
        list["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["company"].as_str().unwrap().to_string())
            .collect()
    }

    fn id_of(list: &Value, company: &str) -> String {
        list["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .find(|j| j["company"] == company)
            .map(|j| j["id"].as_str().unwrap().to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_add_update_delete_over_http() {
        let state = test_state();

        let (status, created) = send(
            &state,
            Method::POST,
            "/api/v1/jobs",
            Some(json!({
                "company": "Stripe",
                "title": "Backend Engineer",
                "location": "Remote",
                "salary": "140000-180000",
                "status": "Applied"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["created_age_days"], 0);
        assert!(created["job_url"].is_null());
        let stripe_id = created["id"].as_str().unwrap().to_string();

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(
            companies(&list),
            vec!["Stripe", "Google", "Microsoft", "Co-op Bank"]
        );

        let (status, _) = send(
            &state,
            Method::PATCH,
            &format!("/api/v1/jobs/{stripe_id}/status"),
            Some(json!({ "status": "Interviewing" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, job) =
            send(&state, Method::GET, &format!("/api/v1/jobs/{stripe_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(job["status"], "Interviewing");
        assert_eq!(job["company"], "Stripe");

        let microsoft = id_of(&list, "Microsoft");
        let (status, _) = send(
            &state,
            Method::DELETE,
            &format!("/api/v1/jobs/{microsoft}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(companies(&list), vec!["Stripe", "Google", "Co-op Bank"]);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_no_ops() {
        let state = test_state();
        let missing = "00000000-0000-7000-8000-000000000000";

        let (status, _) = send(
            &state,
            Method::PATCH,
            &format!("/api/v1/jobs/{missing}/status"),
            Some(json!({ "status": "Applied" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) =
            send(&state, Method::DELETE, &format!("/api/v1/jobs/{missing}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) =
            send(&state, Method::GET, &format!("/api/v1/jobs/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(companies(&list).len(), 3);
    }

    #[tokio::test]
    async fn test_saved_jobs_round_trip() {
        let state = test_state();
        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        let google = id_of(&list, "Google");
        let saved_uri = format!("/api/v1/jobs/{google}/saved");

        for _ in 0..2 {
            let (status, _) = send(&state, Method::PUT, &saved_uri, None).await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }
        let (_, saved) = send(&state, Method::GET, "/api/v1/saved-jobs", None).await;
        assert_eq!(saved, json!([google]));

        // Still saved after the job itself is gone.
        send(&state, Method::DELETE, &format!("/api/v1/jobs/{google}"), None).await;
        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(list["saved_job_ids"], json!([google]));

        let (status, _) = send(&state, Method::DELETE, &saved_uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, saved) = send(&state, Method::GET, "/api/v1/saved-jobs", None).await;
        assert_eq!(saved, json!([]));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let state = test_state();

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs?status=Interviewing", None).await;
        assert_eq!(companies(&list), vec!["Microsoft"]);

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs?q=developer", None).await;
        assert_eq!(companies(&list), vec!["Microsoft", "Co-op Bank"]);

        let (status, body) =
            send(&state, Method::GET, "/api/v1/jobs?status=Ghosted", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_status_in_body_is_a_json_error() {
        let state = test_state();
        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        let google = id_of(&list, "Google");

        let (status, body) = send(
            &state,
            Method::PATCH,
            &format!("/api/v1/jobs/{google}/status"),
            Some(json!({ "status": "Ghosted" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, job) = send(&state, Method::GET, &format!("/api/v1/jobs/{google}"), None).await;
        assert_eq!(job["status"], "Applied");
    }

    #[tokio::test]
    async fn test_bad_uuid_is_a_json_error() {
        let state = test_state();
        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&state, method, "/api/v1/jobs/not-a-uuid", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_json_error() {
        let state = test_state();
        let response = build_router(state.clone())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/jobs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"company\": "))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(companies(&list).len(), 3);
    }

    #[tokio::test]
    async fn test_add_job_with_omitted_fields() {
        let state = test_state();
        let (status, created) = send(
            &state,
            Method::POST,
            "/api/v1/jobs",
            Some(json!({ "company": "X", "title": "", "location": "", "status": "Applied" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["salary"], "");
    }

    #[tokio::test]
    async fn test_get_job_reports_saved_mark() {
        let state = test_state();
        let (_, list) = send(&state, Method::GET, "/api/v1/jobs", None).await;
        let google = id_of(&list, "Google");
        let uri = format!("/api/v1/jobs/{google}");

        let (_, job) = send(&state, Method::GET, &uri, None).await;
        assert_eq!(job["saved"], false);

        send(&state, Method::PUT, &format!("{uri}/saved"), None).await;
        let (_, job) = send(&state, Method::GET, &uri, None).await;
        assert_eq!(job["saved"], true);
        assert_eq!(job["company"], "Google");
    }

    #[tokio::test]
    async fn test_sign_in_outcomes() {
        let state = test_state();

        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/auth/sign-in",
            Some(json!({ "email": "ada@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "ada@example.com");

        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/auth/sign-in",
            Some(json!({ "email": "ada@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "password is required");
    }

    #[tokio::test]
    async fn test_sign_up_requires_name() {
        let state = test_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/api/v1/auth/sign-up",
            Some(json!({ "name": " ", "email": "ada@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "name is required");
    }
}
