use async_trait::async_trait;

use crate::cohort::application::ports::outgoing::CohortResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCohortsError {
    #[error("Failed to fetch cohorts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCohortsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CohortResult>, GetCohortsError>;
}
