use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::{
    incoming::use_cases::{GetStudentsByCohortError, GetStudentsByCohortUseCase},
    outgoing::{StudentQuery, StudentView},
};

#[derive(Debug, Clone)]
pub struct GetStudentsByCohortService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetStudentsByCohortService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStudentsByCohortUseCase for GetStudentsByCohortService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    async fn execute(&self, cohort_id: Uuid) -> Result<Vec<StudentView>, GetStudentsByCohortError> {
        self.query
            .list_by_cohort(cohort_id)
            .await
            .map_err(|e| GetStudentsByCohortError::QueryFailed(e.to_string()))
    }
}
