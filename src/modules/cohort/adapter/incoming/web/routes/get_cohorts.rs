use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    cohort::application::ports::{
        incoming::use_cases::GetCohortsError, outgoing::CohortResult,
    },
    shared::api::ApiResponse,
    AppState,
};

/// List every cohort
#[utoipa::path(
    get,
    path = "/api/cohorts",
    tag = "cohorts",
    responses(
        (status = 200, description = "All cohorts", body = [CohortResult]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/cohorts")]
pub async fn get_cohorts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.cohort.get_list.execute().await {
        Ok(cohorts) => ApiResponse::success(cohorts),
        Err(err) => map_get_cohorts_error(err),
    }
}

fn map_get_cohorts_error(err: GetCohortsError) -> actix_web::HttpResponse {
    match err {
        GetCohortsError::QueryFailed(e) => {
            error!(error = %e, "Failed to list cohorts");
            ApiResponse::internal_error("Error while getting all cohorts")
        }
    }
}
