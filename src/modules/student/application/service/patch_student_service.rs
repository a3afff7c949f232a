use async_trait::async_trait;
use uuid::Uuid;

use crate::student::application::ports::{
    incoming::use_cases::{PatchStudentError, PatchStudentUseCase},
    outgoing::{PatchStudentData, StudentRepository, StudentRepositoryError, StudentResult},
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchStudentService<R>
where
    R: StudentRepository,
{
    repository: R,
}

impl<R> PatchStudentService<R>
where
    R: StudentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchStudentUseCase for PatchStudentService<R>
where
    R: StudentRepository + Send + Sync,
{
    async fn execute(
        &self,
        student_id: Uuid,
        data: PatchStudentData,
    ) -> Result<StudentResult, PatchStudentError> {
        self.repository
            .patch_student(student_id, data)
            .await
            .map_err(|e| match e {
                StudentRepositoryError::NotFound => PatchStudentError::NotFound,
                other => PatchStudentError::RepositoryError(other.to_string()),
            })
    }
}
