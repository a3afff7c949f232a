mod cohort_query_postgres;
mod cohort_repository_postgres;
pub mod sea_orm_entity;

pub use cohort_query_postgres::CohortQueryPostgres;
pub use cohort_repository_postgres::CohortRepositoryPostgres;
