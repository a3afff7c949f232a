use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse, cohort::application::ports::incoming::use_cases::DeleteCohortError,
    shared::api::ApiResponse, AppState,
};

/// Delete a cohort
///
/// Students that reference the cohort keep their reference; it reads back as `null`.
#[utoipa::path(
    delete,
    path = "/api/cohorts/{cohort_id}",
    tag = "cohorts",
    params(("cohort_id" = Uuid, Path, description = "Cohort id")),
    responses(
        (status = 204, description = "Cohort deleted (or never existed)"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[delete("/api/cohorts/{cohort_id}")]
pub async fn delete_cohort_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let cohort_id = path.into_inner();

    match data.cohort.delete.execute(cohort_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCohortError::RepositoryError(e)) => {
            error!(cohort_id = %cohort_id, error = %e, "Failed to delete cohort");
            ApiResponse::internal_error("Error while deleting specific cohort")
        }
    }
}
