mod create_cohort;
mod delete_cohort;
mod get_cohorts;
mod get_single_cohort;
mod update_cohort;

pub use create_cohort::{__path_create_cohort_handler, create_cohort_handler, CreateCohortRequest};
pub use delete_cohort::{__path_delete_cohort_handler, delete_cohort_handler};
pub use get_cohorts::{__path_get_cohorts_handler, get_cohorts_handler};
pub use get_single_cohort::{__path_get_cohort_by_id_handler, get_cohort_by_id_handler};
pub use update_cohort::{__path_update_cohort_handler, update_cohort_handler, UpdateCohortRequest};
