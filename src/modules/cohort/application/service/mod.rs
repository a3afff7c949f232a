mod create_cohort_service;
mod delete_cohort_service;
mod get_cohorts_service;
mod get_single_cohort_service;
mod patch_cohort_service;

pub use create_cohort_service::CreateCohortService;
pub use delete_cohort_service::DeleteCohortService;
pub use get_cohorts_service::GetCohortsService;
pub use get_single_cohort_service::GetSingleCohortService;
pub use patch_cohort_service::PatchCohortService;
