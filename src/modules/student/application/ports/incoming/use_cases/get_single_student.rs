use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::outgoing::StudentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleStudentError {
    #[error("Student not found")]
    NotFound,

    #[error("Failed to fetch student: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleStudentUseCase: Send + Sync {
    async fn execute(&self, student_id: Uuid) -> Result<StudentView, GetSingleStudentError>;
}
