use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    student::application::ports::{
        incoming::use_cases::CreateStudentError,
        outgoing::{CreateStudentData, StudentProject, StudentResult},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[serde(alias = "LastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub program: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    /// Id of the cohort; it does not have to exist.
    pub cohort: Option<Uuid>,
    #[serde(default)]
    pub projects: Vec<StudentProject>,
}

impl From<CreateStudentRequest> for CreateStudentData {
    fn from(req: CreateStudentRequest) -> Self {
        CreateStudentData {
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
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created, cohort as bare id", body = StudentResult),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[post("/api/students")]
pub async fn create_student_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateStudentRequest>,
) -> impl Responder {
    match data.student.create.execute(payload.into_inner().into()).await {
        Ok(student) => ApiResponse::created(student),
        Err(CreateStudentError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create student");
            ApiResponse::internal_error("Error while creating new student")
        }
    }
}
