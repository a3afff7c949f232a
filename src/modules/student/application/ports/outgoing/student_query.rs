use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::StudentProject;
use crate::cohort::application::ports::outgoing::CohortResult;

/// Student with its cohort resolved. `cohort` is `None` both when the student
/// has no reference and when the referenced cohort no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub languages: Vec<String>,
    pub program: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<CohortResult>,
    pub projects: Vec<StudentProject>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StudentQueryError {
    #[error("Student not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StudentQuery: Send + Sync {
    async fn list_students(&self) -> Result<Vec<StudentView>, StudentQueryError>;

    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<StudentView>, StudentQueryError>;

    async fn get_by_id(&self, student_id: Uuid) -> Result<StudentView, StudentQueryError>;
}
