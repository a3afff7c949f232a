use crate::api::schemas::ErrorResponse;
use utoipa::OpenApi;

// Cohorts
use crate::cohort::adapter::incoming::web::routes::{CreateCohortRequest, UpdateCohortRequest};
use crate::cohort::application::ports::outgoing::CohortResult;

// Students
use crate::student::adapter::incoming::web::routes::{
    CreateStudentRequest, UpdateStudentRequest,
};
use crate::student::application::ports::outgoing::{
    ProjectDetails, StudentProject, StudentResult, StudentView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cohort Roster API",
        version = "1.0.0",
        description = "Students and cohorts of a bootcamp, with students optionally linked to one cohort"
    ),
    paths(
        // Cohort endpoints
        crate::cohort::adapter::incoming::web::routes::create_cohort_handler,
        crate::cohort::adapter::incoming::web::routes::get_cohorts_handler,
        crate::cohort::adapter::incoming::web::routes::get_cohort_by_id_handler,
        crate::cohort::adapter::incoming::web::routes::update_cohort_handler,
        crate::cohort::adapter::incoming::web::routes::delete_cohort_handler,

        // Student endpoints
        crate::student::adapter::incoming::web::routes::create_student_handler,
        crate::student::adapter::incoming::web::routes::get_students_handler,
        crate::student::adapter::incoming::web::routes::get_students_by_cohort_handler,
        crate::student::adapter::incoming::web::routes::get_student_by_id_handler,
        crate::student::adapter::incoming::web::routes::update_student_handler,
        crate::student::adapter::incoming::web::routes::delete_student_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Cohort DTOs
            CohortResult,
            CreateCohortRequest,
            UpdateCohortRequest,

            // Student DTOs
            StudentResult,
            StudentView,
            StudentProject,
            ProjectDetails,
            CreateStudentRequest,
            UpdateStudentRequest
        )
    ),
    tags(
        (name = "cohorts", description = "Cohort management endpoints"),
        (name = "students", description = "Student management endpoints"),
    )
)]
pub struct ApiDoc;
