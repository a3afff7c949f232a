use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::outgoing::CohortResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCohortError {
    #[error("Cohort not found")]
    NotFound,

    #[error("Failed to fetch cohort: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleCohortUseCase: Send + Sync {
    async fn execute(&self, cohort_id: Uuid) -> Result<CohortResult, GetSingleCohortError>;
}
