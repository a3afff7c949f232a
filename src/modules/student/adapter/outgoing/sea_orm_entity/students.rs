use sea_orm::entity::prelude::*;

use crate::modules::cohort::adapter::outgoing::sea_orm_entity::cohorts;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub first_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub last_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub languages: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub program: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub background: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub cohort_id: Option<Uuid>,

    // JSONB array of project entries (plain titles or objects)
    #[sea_orm(column_type = "JsonBinary")]
    pub projects: Json,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::cohort::adapter::outgoing::sea_orm_entity::cohorts::Entity",
        from = "Column::CohortId",
        to = "crate::modules::cohort::adapter::outgoing::sea_orm_entity::cohorts::Column::Id"
    )]
    Cohorts,
}

impl Related<cohorts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cohorts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
