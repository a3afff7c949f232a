use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cohorts table
        // =====================================================
        // Every attribute is optional at the storage layer.
        manager
            .create_table(
                Table::create()
                    .table(Cohorts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cohorts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Cohorts::CohortSlug).text())
                    .col(ColumnDef::new(Cohorts::CohortName).text())
                    .col(ColumnDef::new(Cohorts::Program).text())
                    .col(ColumnDef::new(Cohorts::Format).text())
                    .col(ColumnDef::new(Cohorts::Campus).text())
                    .col(ColumnDef::new(Cohorts::StartDate).date())
                    .col(ColumnDef::new(Cohorts::EndDate).date())
                    .col(ColumnDef::new(Cohorts::InProgress).boolean())
                    .col(ColumnDef::new(Cohorts::ProgramManager).text())
                    .col(ColumnDef::new(Cohorts::LeadTeacher).text())
                    .col(ColumnDef::new(Cohorts::TotalHours).double())
                    .col(
                        ColumnDef::new(Cohorts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cohorts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cohorts {
    Table,
    Id,
    CohortSlug,
    CohortName,
    Program,
    Format,
    Campus,
    StartDate,
    EndDate,
    InProgress,
    ProgramManager,
    LeadTeacher,
    TotalHours,
    CreatedAt,
}
