use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::{
    incoming::use_cases::{DeleteCohortError, DeleteCohortUseCase},
    outgoing::CohortRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCohortUseCase for DeleteCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    async fn execute(&self, cohort_id: Uuid) -> Result<(), DeleteCohortError> {
        self.repository
            .delete_cohort(cohort_id)
            .await
            .map_err(|e| DeleteCohortError::RepositoryError(e.to_string()))
    }
}
