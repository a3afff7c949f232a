use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::{
    incoming::use_cases::{GetSingleStudentError, GetSingleStudentUseCase},
    outgoing::{StudentQuery, StudentQueryError, StudentView},
};

#[derive(Debug, Clone)]
pub struct GetSingleStudentService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleStudentService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleStudentUseCase for GetSingleStudentService<Q>
where
    Q: StudentQuery + Send + Sync,
{
    async fn execute(&self, student_id: Uuid) -> Result<StudentView, GetSingleStudentError> {
        self.query
            .get_by_id(student_id)
            .await
            .map_err(|e| match e {
                StudentQueryError::NotFound => GetSingleStudentError::NotFound,
                other => GetSingleStudentError::QueryFailed(other.to_string()),
            })
    }
}
