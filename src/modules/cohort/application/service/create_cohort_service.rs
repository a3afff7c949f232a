use async_trait::async_trait;

use crate::cohort::application::ports::{
    incoming::use_cases::{CreateCohortError, CreateCohortUseCase},
    outgoing::{CohortRepository, CohortResult, CreateCohortData},
};

#[derive(Debug, Clone)]
pub struct CreateCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCohortUseCase for CreateCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    async fn execute(&self, data: CreateCohortData) -> Result<CohortResult, CreateCohortError> {
        self.repository
            .create_cohort(data)
            .await
            .map_err(|e| CreateCohortError::RepositoryError(e.to_string()))
    }
}
