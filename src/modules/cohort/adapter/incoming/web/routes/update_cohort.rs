use actix_web::{put, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    cohort::application::ports::{
        incoming::use_cases::PatchCohortError,
        outgoing::{CohortResult, PatchCohortData},
    },
    shared::{api::ApiResponse, date_input::patch_date, patch_field::PatchField},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Fields left out of the body keep their stored value; `null` clears them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCohortRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cohort_slug: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cohort_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub program: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub format: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub campus: PatchField<String>,

    #[serde(default, deserialize_with = "patch_date")]
    #[schema(value_type = Option<NaiveDate>)]
    pub start_date: PatchField<NaiveDate>,

    #[serde(default, deserialize_with = "patch_date")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: PatchField<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub in_progress: PatchField<bool>,

    #[serde(default, alias = "programManger")]
    #[schema(value_type = Option<String>)]
    pub program_manager: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub lead_teacher: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub total_hours: PatchField<f64>,
}

impl From<UpdateCohortRequest> for PatchCohortData {
    fn from(req: UpdateCohortRequest) -> Self {
        PatchCohortData {
            cohort_slug: req.cohort_slug,
            cohort_name: req.cohort_name,
            program: req.program,
            format: req.format,
            campus: req.campus,
            start_date: req.start_date,
            end_date: req.end_date,
            in_progress: req.in_progress,
            program_manager: req.program_manager,
            lead_teacher: req.lead_teacher,
            total_hours: req.total_hours,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a cohort (merge semantics)
#[utoipa::path(
    put,
    path = "/api/cohorts/{cohort_id}",
    tag = "cohorts",
    params(("cohort_id" = Uuid, Path, description = "Cohort id")),
    request_body = UpdateCohortRequest,
    responses(
        (status = 200, description = "Post-update cohort", body = CohortResult),
        (status = 404, description = "No cohort with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[put("/api/cohorts/{cohort_id}")]
pub async fn update_cohort_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateCohortRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cohort_id = path.into_inner();
    let patch_data: PatchCohortData = req.into_inner().into();

    match data.cohort.patch.execute(cohort_id, patch_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchCohortError::NotFound) => ApiResponse::not_found("Cohort not found"),

        Err(PatchCohortError::RepositoryError(e)) => {
            error!("Repository error updating cohort {}: {}", cohort_id, e);
            ApiResponse::internal_error("Error while updating specific cohort")
        }
    }
}
