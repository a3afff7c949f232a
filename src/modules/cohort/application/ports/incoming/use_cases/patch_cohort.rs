use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::outgoing::{CohortResult, PatchCohortData};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCohortError {
    #[error("Cohort not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchCohortUseCase: Send + Sync {
    async fn execute(
        &self,
        cohort_id: Uuid,
        data: PatchCohortData,
    ) -> Result<CohortResult, PatchCohortError>;
}
