use async_trait::async_trait;

use crate::student::application::ports::{
    incoming::use_cases::{GetStudentsError, GetStudentsUseCase},
    outgoing::{StudentQuery, StudentView},
};

#[derive(Debug, Clone)]
pub struct GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStudentsUseCase for GetStudentsService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<StudentView>, GetStudentsError> {
        self.query
            .list_students()
            .await
            .map_err(|e| GetStudentsError::QueryFailed(e.to_string()))
    }
}
