// src/modules/cohort/application/ports/outgoing/cohort_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Every cohort attribute is optional; nothing is validated on the way in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCohortData {
    pub cohort_slug: Option<String>,
    pub cohort_name: Option<String>,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub in_progress: Option<bool>,
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    pub total_hours: Option<f64>,
}

/// Merge semantics: Unset => keep, Null => clear, Value => replace.
#[derive(Debug, Clone, Default)]
pub struct PatchCohortData {
    pub cohort_slug: PatchField<String>,
    pub cohort_name: PatchField<String>,
    pub program: PatchField<String>,
    pub format: PatchField<String>,
    pub campus: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub in_progress: PatchField<bool>,
    pub program_manager: PatchField<String>,
    pub lead_teacher: PatchField<String>,
    pub total_hours: PatchField<f64>,
}

impl PatchCohortData {
    pub fn is_empty(&self) -> bool {
        self.cohort_slug.is_unset()
            && self.cohort_name.is_unset()
            && self.program.is_unset()
            && self.format.is_unset()
            && self.campus.is_unset()
            && self.start_date.is_unset()
            && self.end_date.is_unset()
            && self.in_progress.is_unset()
            && self.program_manager.is_unset()
            && self.lead_teacher.is_unset()
            && self.total_hours.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CohortResult {
    pub id: Uuid,
    pub cohort_slug: Option<String>,
    pub cohort_name: Option<String>,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub in_progress: Option<bool>,
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    pub total_hours: Option<f64>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortRepositoryError {
    #[error("Cohort not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CohortRepository: Send + Sync {
    async fn create_cohort(
        &self,
        data: CreateCohortData,
    ) -> Result<CohortResult, CohortRepositoryError>;

    async fn patch_cohort(
        &self,
        cohort_id: Uuid,
        data: PatchCohortData,
    ) -> Result<CohortResult, CohortRepositoryError>;

    /// Deleting an id that does not exist is not an error.
    /// Students referencing the cohort are left untouched.
    async fn delete_cohort(&self, cohort_id: Uuid) -> Result<(), CohortRepositoryError>;
}
