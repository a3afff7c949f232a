mod student_query_postgres;
mod student_repository_postgres;
pub mod sea_orm_entity;

pub use student_query_postgres::StudentQueryPostgres;
pub use student_repository_postgres::StudentRepositoryPostgres;
