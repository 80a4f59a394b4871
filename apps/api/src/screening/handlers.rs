//! Axum route handlers for the legitimacy gate.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::screening::{check_legitimacy, LegitimacyOutcome};
use crate::state::AppState;

/// Shown when the check itself failed and the user may proceed anyway.
const UNVERIFIED_NOTICE: &str =
    "We couldn't verify this job's legitimacy. Please proceed with caution.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// "legitimate" | "flagged" | "unverified"
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// POST /api/v1/jobs/:id/verify
///
/// The apply gate: checks one job and either releases the apply URL,
/// blocks with the verdict reason, or releases with an explicit caution
/// notice when the service could not be reached.
pub async fn handle_verify(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VerifyResponse>, AppError> {
    let job = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    let response = match check_legitimacy(state.verdicts.as_ref(), job).await {
        LegitimacyOutcome::Verdict(verdict) if verdict.is_legitimate => VerifyResponse {
            status: "legitimate",
            reason: None,
            apply_url: Some(job.apply_url.clone()),
            notice: None,
        },
        LegitimacyOutcome::Verdict(verdict) => VerifyResponse {
            status: "flagged",
            reason: verdict.reason,
            apply_url: None,
            notice: None,
        },
        LegitimacyOutcome::Unverified => VerifyResponse {
            status: "unverified",
            reason: None,
            apply_url: Some(job.apply_url.clone()),
            notice: Some(UNVERIFIED_NOTICE),
        },
    };

    Ok(Json(response))
}
