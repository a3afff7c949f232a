use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCohortError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCohortUseCase: Send + Sync {
    async fn execute(&self, cohort_id: Uuid) -> Result<(), DeleteCohortError>;
}
