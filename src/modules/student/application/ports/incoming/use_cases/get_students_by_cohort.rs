use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::outgoing::StudentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStudentsByCohortError {
    #[error("Failed to list students of cohort: {0}")]
    QueryFailed(String),
}

/// An unknown cohort id yields an empty list, not an error.
#[async_trait]
pub trait GetStudentsByCohortUseCase: Send + Sync {
    async fn execute(&self, cohort_id: Uuid) -> Result<Vec<StudentView>, GetStudentsByCohortError>;
}
