//! Legitimacy screening — the fake-job verdict is delegated to an LLM behind
//! a pluggable provider trait, with a non-blocking failure policy: a failed
//! check never stops the user, it downgrades to an unverified pass-through
//! that stays distinguishable from a verified-legitimate verdict.

pub mod handlers;
pub mod prompts;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::job::Job;
use crate::screening::prompts::{SCREEN_PROMPT_TEMPLATE, SCREEN_SYSTEM};

/// Verdict returned by the legitimacy service. Transient: produced per
/// request, never cached, never written back onto the Job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegitimacyVerdict {
    pub is_legitimate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of one legitimacy check. `Unverified` is deliberately distinct
/// from a positive verdict: the caller may proceed either way, but only one
/// of the two was actually vouched for by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum LegitimacyOutcome {
    Verdict(LegitimacyVerdict),
    Unverified,
}

/// Substituted when the service flags a job without saying why.
pub const FALLBACK_FLAG_REASON: &str =
    "This job has been flagged as suspicious and we advise against applying.";

// ────────────────────────────────────────────────────────────────────────────
// Provider trait and backends
// ────────────────────────────────────────────────────────────────────────────

/// The verdict provider seam. Implement this to swap backends without
/// touching handlers or the screening logic.
///
/// Carried in `AppState` as `Arc<dyn VerdictProvider>`.
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    async fn assess(&self, job: &Job) -> Result<LegitimacyVerdict, AppError>;
}

/// Default backend: one LLM call per job, structured JSON out, no retry.
pub struct LlmVerdictProvider(pub LlmClient);

#[async_trait]
impl VerdictProvider for LlmVerdictProvider {
    async fn assess(&self, job: &Job) -> Result<LegitimacyVerdict, AppError> {
        let prompt = SCREEN_PROMPT_TEMPLATE
            .replace("{job_title}", &job.title)
            .replace("{company}", &job.company)
            .replace("{description}", &job.description)
            .replace("{location}", &job.location);

        self.0
            .call_json::<LegitimacyVerdict>(&prompt, SCREEN_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("legitimacy check failed: {e}")))
    }
}

/// Deterministic backend that vouches for everything. Selected at startup
/// via `DISABLE_AI_SCREENING` for offline or CI runs.
pub struct AlwaysLegitimate;

#[async_trait]
impl VerdictProvider for AlwaysLegitimate {
    async fn assess(&self, _job: &Job) -> Result<LegitimacyVerdict, AppError> {
        Ok(LegitimacyVerdict {
            is_legitimate: true,
            reason: None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Screening operations
// ────────────────────────────────────────────────────────────────────────────

/// Runs one check. Never fails: a provider error degrades to `Unverified`
/// so a broken service cannot block an application. A negative verdict is
/// guaranteed to carry a reason.
pub async fn check_legitimacy(provider: &dyn VerdictProvider, job: &Job) -> LegitimacyOutcome {
    match provider.assess(job).await {
        Ok(mut verdict) => {
            if !verdict.is_legitimate && verdict.reason.is_none() {
                verdict.reason = Some(FALLBACK_FLAG_REASON.to_string());
            }
            LegitimacyOutcome::Verdict(verdict)
        }
        Err(e) => {
            warn!("could not verify job {}: {e}", job.id);
            LegitimacyOutcome::Unverified
        }
    }
}

/// Screens a whole listing concurrently, one independent check per job.
/// Jobs with an explicit negative verdict are dropped; jobs whose check
/// failed stay in (unverified, not hidden). Input order is preserved:
/// verdicts are joined back by job id, never by completion order.
pub async fn screen_jobs(provider: Arc<dyn VerdictProvider>, jobs: Vec<Job>) -> Vec<Job> {
    let mut checks = JoinSet::new();
    for job in jobs.clone() {
        let provider = Arc::clone(&provider);
        checks.spawn(async move {
            let outcome = check_legitimacy(provider.as_ref(), &job).await;
            (job.id, outcome)
        });
    }

    let mut flagged: HashSet<String> = HashSet::new();
    while let Some(joined) = checks.join_next().await {
        match joined {
            Ok((id, LegitimacyOutcome::Verdict(verdict))) if !verdict.is_legitimate => {
                flagged.insert(id);
            }
            Ok(_) => {}
            Err(e) => warn!("screening task failed: {e}"),
        }
    }

    jobs.into_iter()
        .filter(|job| !flagged.contains(&job.id))
        .collect()
}
