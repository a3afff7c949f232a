use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse, shared::api::ApiResponse,
    student::application::ports::incoming::use_cases::DeleteStudentError, AppState,
};

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    tag = "students",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted (or never existed)"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[delete("/api/students/{student_id}")]
pub async fn delete_student_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let student_id = path.into_inner();

    match data.student.delete.execute(student_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteStudentError::RepositoryError(e)) => {
            error!(student_id = %student_id, error = %e, "Failed to delete student");
            ApiResponse::internal_error("Error while deleting specific student")
        }
    }
}
