use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    cohort::application::ports::{
        incoming::use_cases::CreateCohortError,
        outgoing::{CohortResult, CreateCohortData},
    },
    shared::{api::ApiResponse, date_input::option_date},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCohortRequest {
    pub cohort_slug: Option<String>,
    #[schema(example = "Web Dev 101")]
    pub cohort_name: Option<String>,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    #[serde(default, deserialize_with = "option_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "option_date")]
    pub end_date: Option<NaiveDate>,
    pub in_progress: Option<bool>,
    #[serde(alias = "programManger")]
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    #[schema(example = 480)]
    pub total_hours: Option<f64>,
}

impl From<CreateCohortRequest> for CreateCohortData {
    fn from(req: CreateCohortRequest) -> Self {
        CreateCohortData {
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
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a cohort
#[utoipa::path(
    post,
    path = "/api/cohorts",
    tag = "cohorts",
    request_body = CreateCohortRequest,
    responses(
        (status = 201, description = "Cohort created", body = CohortResult),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[post("/api/cohorts")]
pub async fn create_cohort_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateCohortRequest>,
) -> impl Responder {
    match data.cohort.create.execute(payload.into_inner().into()).await {
        Ok(cohort) => ApiResponse::created(cohort),
        Err(CreateCohortError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create cohort");
            ApiResponse::internal_error("Error while creating new cohort")
        }
    }
}
