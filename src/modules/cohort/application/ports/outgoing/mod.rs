pub mod cohort_query;
pub mod cohort_repository;

pub use cohort_query::{CohortQuery, CohortQueryError};
pub use cohort_repository::{
    CohortRepository, CohortRepositoryError, CohortResult, CreateCohortData, PatchCohortData,
};
