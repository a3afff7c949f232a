use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::{
    incoming::use_cases::{DeleteStudentError, DeleteStudentUseCase},
    outgoing::StudentRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteStudentUseCase for DeleteStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(&self, student_id: Uuid) -> Result<(), DeleteStudentError> {
        self.repository
            .delete_student(student_id)
            .await
            .map_err(|e| DeleteStudentError::RepositoryError(e.to_string()))
    }
}
