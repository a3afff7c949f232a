use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    student::application::ports::{incoming::use_cases::GetStudentsError, outgoing::StudentView},
    AppState,
};

/// List every student with their cohort inlined
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses(
        (status = 200, description = "All students", body = [StudentView]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/students")]
pub async fn get_students_handler(data: web::Data<AppState>) -> impl Responder {
    match data.student.get_list.execute().await {
        Ok(students) => ApiResponse::success(students),
        Err(GetStudentsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list students");
            ApiResponse::internal_error("Error while getting all students")
        }
    }
}
