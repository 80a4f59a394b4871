//! Axum route handlers for the company scan panel.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scanner::{scan_by_company, ScanResult, KNOWN_COMPANIES};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub companies: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct KnownCompaniesResponse {
    pub companies: Vec<&'static str>,
}

/// POST /api/v1/scan
///
/// Scans the store for postings from the given companies; defaults to the
/// curated well-known list when the body names none.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResult>, AppError> {
    let companies: Vec<String> = match request.companies {
        Some(companies) if !companies.is_empty() => companies,
        _ => KNOWN_COMPANIES.iter().map(|c| c.to_string()).collect(),
    };

    let result = scan_by_company(&state.llm, &state.store, &companies).await;
    Ok(Json(result))
}

/// GET /api/v1/scan/companies
///
/// The curated company list the scan defaults to.
pub async fn handle_known_companies() -> Json<KnownCompaniesResponse> {
    Json(KnownCompaniesResponse {
        companies: KNOWN_COMPANIES.to_vec(),
    })
}
