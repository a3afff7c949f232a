// src/modules/student/application/ports/outgoing/student_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

/// A portfolio entry. Older records only carry a title, newer ones the full object.
/// Anything else the client sends is stored verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StudentProject {
    Title(String),
    Detailed(ProjectDetails),
    Other(serde_json::Value),
}

/// Extra keys fail this variant so the entry falls through to `Other` intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectDetails {
    #[schema(example = "Ironhack Quiz")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStudentData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub languages: Vec<String>,
    pub program: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    /// Not checked against the cohorts table.
    pub cohort: Option<Uuid>,
    pub projects: Vec<StudentProject>,
}

/// Merge semantics: Unset => keep, Null => clear, Value => replace.
/// Clearing `languages` or `projects` stores an empty list.
#[derive(Debug, Clone, Default)]
pub struct PatchStudentData {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub linkedin_url: PatchField<String>,
    pub languages: PatchField<Vec<String>>,
    pub program: PatchField<String>,
    pub background: PatchField<String>,
    pub image: PatchField<String>,
    pub cohort: PatchField<Uuid>,
    pub projects: PatchField<Vec<StudentProject>>,
}

impl PatchStudentData {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_unset()
            && self.last_name.is_unset()
            && self.email.is_unset()
            && self.phone.is_unset()
            && self.linkedin_url.is_unset()
            && self.languages.is_unset()
            && self.program.is_unset()
            && self.background.is_unset()
            && self.image.is_unset()
            && self.cohort.is_unset()
            && self.projects.is_unset()
    }
}

/// Student as stored, with the cohort reference left as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
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
    pub cohort: Option<Uuid>,
    pub projects: Vec<StudentProject>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StudentRepositoryError {
    #[error("Student not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create_student(
        &self,
        data: CreateStudentData,
    ) -> Result<StudentResult, StudentRepositoryError>;

    async fn patch_student(
        &self,
        student_id: Uuid,
        data: PatchStudentData,
    ) -> Result<StudentResult, StudentRepositoryError>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_student(&self, student_id: Uuid) -> Result<(), StudentRepositoryError>;
}
