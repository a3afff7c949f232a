use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    cohort::application::ports::{
        incoming::use_cases::GetSingleCohortError, outgoing::CohortResult,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Fetch one cohort by id
#[utoipa::path(
    get,
    path = "/api/cohorts/{cohort_id}",
    tag = "cohorts",
    params(("cohort_id" = Uuid, Path, description = "Cohort id")),
    responses(
        (status = 200, description = "The cohort", body = CohortResult),
        (status = 404, description = "No cohort with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/cohorts/{cohort_id}")]
pub async fn get_cohort_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cohort_id = path.into_inner();

    match data.cohort.get_single.execute(cohort_id).await {
        Ok(cohort) => ApiResponse::success(cohort),
        Err(GetSingleCohortError::NotFound) => ApiResponse::not_found("Cohort not found"),
        Err(GetSingleCohortError::QueryFailed(e)) => {
            error!(cohort_id = %cohort_id, error = %e, "Failed to fetch cohort");
            ApiResponse::internal_error("Error while getting specific cohort")
        }
    }
}
