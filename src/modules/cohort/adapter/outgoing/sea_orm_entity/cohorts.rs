use crate::cohort::application::ports::outgoing::CohortResult;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cohorts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub cohort_slug: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub cohort_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub program: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub format: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub campus: Option<String>,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,

    pub in_progress: Option<bool>,

    #[sea_orm(column_type = "Text", nullable)]
    pub program_manager: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub lead_teacher: Option<String>,

    #[sea_orm(column_type = "Double", nullable)]
    pub total_hours: Option<f64>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(self) -> CohortResult {
        CohortResult {
            id: self.id,
            cohort_slug: self.cohort_slug,
            cohort_name: self.cohort_name,
            program: self.program,
            format: self.format,
            campus: self.campus,
            start_date: self.start_date,
            end_date: self.end_date,
            in_progress: self.in_progress,
            program_manager: self.program_manager,
            lead_teacher: self.lead_teacher,
            total_hours: self.total_hours,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::student::adapter::outgoing::sea_orm_entity::students::Entity")]
    Students,
}

impl Related<crate::modules::student::adapter::outgoing::sea_orm_entity::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
