use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    student::application::ports::{
        incoming::use_cases::GetStudentsByCohortError, outgoing::StudentView,
    },
    AppState,
};

/// List the students of one cohort
///
/// An unknown cohort id returns an empty array.
#[utoipa::path(
    get,
    path = "/api/students/cohort/{cohort_id}",
    tag = "students",
    params(("cohort_id" = Uuid, Path, description = "Cohort id")),
    responses(
        (status = 200, description = "Students referencing the cohort", body = [StudentView]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/students/cohort/{cohort_id}")]
pub async fn get_students_by_cohort_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cohort_id = path.into_inner();

    match data.student.get_by_cohort.execute(cohort_id).await {
        Ok(students) => ApiResponse::success(students),
        Err(GetStudentsByCohortError::QueryFailed(e)) => {
            error!(cohort_id = %cohort_id, error = %e, "Failed to list students of cohort");
            ApiResponse::internal_error("Error while getting students from specific cohort")
        }
    }
}
