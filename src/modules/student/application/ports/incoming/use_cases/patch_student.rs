use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::outgoing::{PatchStudentData, StudentResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchStudentError {
    #[error("Student not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchStudentUseCase: Send + Sync {
    async fn execute(
        &self,
        student_id: Uuid,
        data: PatchStudentData,
    ) -> Result<StudentResult, PatchStudentError>;
}
