use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    student::application::ports::{
        incoming::use_cases::GetSingleStudentError, outgoing::StudentView,
    },
    AppState,
};

/// Fetch one student with the cohort inlined
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = "students",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = StudentView),
        (status = 404, description = "No student with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/students/{student_id}")]
pub async fn get_student_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let student_id = path.into_inner();

    match data.student.get_single.execute(student_id).await {
        Ok(student) => ApiResponse::success(student),
        Err(GetSingleStudentError::NotFound) => ApiResponse::not_found("Student not found"),
        Err(GetSingleStudentError::QueryFailed(e)) => {
            error!(student_id = %student_id, error = %e, "Failed to fetch student");
            ApiResponse::internal_error("Error while getting specific student")
        }
    }
}
