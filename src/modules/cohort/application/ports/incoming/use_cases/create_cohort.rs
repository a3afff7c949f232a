use async_trait::async_trait;

use crate::cohort::application::ports::outgoing::{CohortResult, CreateCohortData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCohortError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCohortUseCase: Send + Sync {
    async fn execute(&self, data: CreateCohortData) -> Result<CohortResult, CreateCohortError>;
}
