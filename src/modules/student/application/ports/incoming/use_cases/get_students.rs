use async_trait::async_trait;

use crate::student::application::ports::outgoing::StudentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStudentsError {
    #[error("Failed to list students: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetStudentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<StudentView>, GetStudentsError>;
}
