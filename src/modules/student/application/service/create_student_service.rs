use async_trait::async_trait;

use crate::student::application::ports::{
    incoming::use_cases::{CreateStudentError, CreateStudentUseCase},
    outgoing::{CreateStudentData, StudentRepository, StudentResult},
};

#[derive(Debug, Clone)]
pub struct CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateStudentUseCase for CreateStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(&self, data: CreateStudentData) -> Result<StudentResult, CreateStudentError> {
        self.repository
            .create_student(data)
            .await
            .map_err(|e| CreateStudentError::RepositoryError(e.to_string()))
    }
}
