pub use sea_orm_migration::prelude::*;

mod m20240311_000001_create_table_cohorts;
mod m20240311_000002_create_table_students;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240311_000001_create_table_cohorts::Migration),
            Box::new(m20240311_000002_create_table_students::Migration),
        ]
    }
}
