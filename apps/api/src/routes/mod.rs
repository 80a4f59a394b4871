pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers as job_handlers;
use crate::scanner::handlers as scan_handlers;
use crate::screening::handlers as screening_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listing API
        .route("/api/v1/jobs", get(job_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        // Legitimacy gate
        .route(
            "/api/v1/jobs/:id/verify",
            post(screening_handlers::handle_verify),
        )
        // Company scan
        .route("/api/v1/scan", post(scan_handlers::handle_scan))
        .route(
            "/api/v1/scan/companies",
            get(scan_handlers::handle_known_companies),
        )
        .with_state(state)
}
