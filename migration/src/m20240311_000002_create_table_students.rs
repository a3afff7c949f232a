use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create students table
        // =====================================================
        // No foreign key on cohort_id: references to missing cohorts are allowed.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Students::FirstName).text())
                    .col(ColumnDef::new(Students::LastName).text())
                    .col(ColumnDef::new(Students::Email).text())
                    .col(ColumnDef::new(Students::Phone).text())
                    .col(ColumnDef::new(Students::LinkedinUrl).text())
                    .col(
                        ColumnDef::new(Students::Languages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Students::Program).text())
                    .col(ColumnDef::new(Students::Background).text())
                    .col(ColumnDef::new(Students::Image).text())
                    .col(ColumnDef::new(Students::CohortId).uuid())
                    .col(
                        ColumnDef::new(Students::Projects)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Students-by-cohort listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_students_cohort_id
                ON students (cohort_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_students_cohort_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    LinkedinUrl,
    Languages,
    Program,
    Background,
    Image,
    CohortId,
    Projects,
    CreatedAt,
}
