// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Cohort not found")]
    pub message: String,
}
