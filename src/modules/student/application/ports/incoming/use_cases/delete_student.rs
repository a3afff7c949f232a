use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteStudentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteStudentUseCase: Send + Sync {
    async fn execute(&self, student_id: Uuid) -> Result<(), DeleteStudentError>;
}
