use async_trait::async_trait;
use uuid::Uuid;

use super::CohortResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortQueryError {
    #[error("Cohort not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CohortQuery: Send + Sync {
    async fn list_cohorts(&self) -> Result<Vec<CohortResult>, CohortQueryError>;

    async fn get_by_id(&self, cohort_id: Uuid) -> Result<CohortResult, CohortQueryError>;
}
