use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::{
    incoming::use_cases::{GetSingleCohortError, GetSingleCohortUseCase},
    outgoing::{CohortQuery, CohortQueryError, CohortResult},
};

#[derive(Debug, Clone)]
pub struct GetSingleCohortService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleCohortService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCohortUseCase for GetSingleCohortService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    async fn execute(&self, cohort_id: Uuid) -> Result<CohortResult, GetSingleCohortError> {
        self.query
            .get_by_id(cohort_id)
            .await
            .map_err(|e| match e {
                CohortQueryError::NotFound => GetSingleCohortError::NotFound,
                CohortQueryError::DatabaseError(msg) => GetSingleCohortError::QueryFailed(msg),
            })
    }
}
