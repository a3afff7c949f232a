use async_trait::async_trait;

use crate::student::application::ports::outgoing::{CreateStudentData, StudentResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateStudentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateStudentUseCase: Send + Sync {
    async fn execute(&self, data: CreateStudentData) -> Result<StudentResult, CreateStudentError>;
}
