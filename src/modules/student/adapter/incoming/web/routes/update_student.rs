use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::{api::ApiResponse, patch_field::PatchField},
    student::application::ports::{
        incoming::use_cases::PatchStudentError,
        outgoing::{PatchStudentData, StudentProject, StudentResult},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields keep their stored value; `null` clears them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub first_name: PatchField<String>,

    #[serde(default, alias = "LastName")]
    #[schema(value_type = Option<String>)]
    pub last_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub linkedin_url: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub languages: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub program: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub background: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub cohort: PatchField<Uuid>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<StudentProject>>)]
    pub projects: PatchField<Vec<StudentProject>>,
}

impl From<UpdateStudentRequest> for PatchStudentData {
    fn from(req: UpdateStudentRequest) -> Self {
        PatchStudentData {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            linkedin_url: req.linkedin_url,
            languages: req.languages,
            program: req.program,
            background: req.background,
            image: req.image,
            cohort: req.cohort,
            projects: req.projects,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a student (merge semantics)
///
/// The response carries the cohort as a bare id.
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    tag = "students",
    params(("student_id" = Uuid, Path, description = "Student id")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Post-update student", body = StudentResult),
        (status = 404, description = "No student with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[put("/api/students/{student_id}")]
pub async fn update_student_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateStudentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let student_id = path.into_inner();
    let patch_data: PatchStudentData = req.into_inner().into();

    match data.student.patch.execute(student_id, patch_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchStudentError::NotFound) => ApiResponse::not_found("Student not found"),

        Err(PatchStudentError::RepositoryError(e)) => {
            error!(student_id = %student_id, error = %e, "Failed to update student");
            ApiResponse::internal_error("Error while updating specific student")
        }
    }
}
