use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::{
    incoming::use_cases::{PatchCohortError, PatchCohortUseCase},
    outgoing::{CohortRepository, CohortRepositoryError, CohortResult, PatchCohortData},
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchCohortService<R>
where
    R: CohortRepository,
{
    repository: R,
}

impl<R> PatchCohortService<R>
where
    R: CohortRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchCohortUseCase for PatchCohortService<R>
where
    R: CohortRepository + Send + Sync,
{
    async fn execute(
        &self,
        cohort_id: Uuid,
        data: PatchCohortData,
    ) -> Result<CohortResult, PatchCohortError> {
        self.repository
            .patch_cohort(cohort_id, data)
            .await
            .map_err(|e| match e {
                CohortRepositoryError::NotFound => PatchCohortError::NotFound,
                CohortRepositoryError::DatabaseError(msg) => PatchCohortError::RepositoryError(msg),
            })
    }
}
