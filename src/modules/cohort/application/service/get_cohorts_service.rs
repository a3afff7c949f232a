use async_trait::async_trait;

use crate::cohort::application::ports::{
    incoming::use_cases::{GetCohortsError, GetCohortsUseCase},
    outgoing::{CohortQuery, CohortResult},
};

#[derive(Debug, Clone)]
pub struct GetCohortsService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCohortsService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCohortsUseCase for GetCohortsService<Q>
where
    Q: CohortQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CohortResult>, GetCohortsError> {
        self.query
            .list_cohorts()
            .await
            .map_err(|e| GetCohortsError::QueryFailed(e.to_string()))
    }
}
