mod create_cohort;
mod delete_cohort;
mod get_cohorts;
mod get_single_cohort;
mod patch_cohort;

pub use create_cohort::{CreateCohortError, CreateCohortUseCase};
pub use delete_cohort::{DeleteCohortError, DeleteCohortUseCase};
pub use get_cohorts::{GetCohortsError, GetCohortsUseCase};
pub use get_single_cohort::{GetSingleCohortError, GetSingleCohortUseCase};
pub use patch_cohort::{PatchCohortError, PatchCohortUseCase};
