use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::screening::VerdictProvider;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; concurrent reads need no locking.
    pub store: Arc<JobStore>,
    pub llm: LlmClient,
    /// Pluggable verdict provider. Default: LlmVerdictProvider. Swap via DISABLE_AI_SCREENING.
    pub verdicts: Arc<dyn VerdictProvider>,
}
