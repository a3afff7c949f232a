use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SelectTwo,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::cohort::adapter::outgoing::sea_orm_entity::cohorts;
use crate::student::application::ports::outgoing::{StudentQuery, StudentQueryError, StudentView};

// SeaORM entity
use super::sea_orm_entity::students::{Column, Entity as StudentEntity, Model as StudentModel};

#[derive(Debug, Clone)]
pub struct StudentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentQuery for StudentQueryPostgres {
    async fn list_students(&self) -> Result<Vec<StudentView>, StudentQueryError> {
        let rows = list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|(student, cohort)| model_to_view(student, cohort))
            .collect()
    }

    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<StudentView>, StudentQueryError> {
        let rows = list_query()
            .filter(Column::CohortId.eq(cohort_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|(student, cohort)| model_to_view(student, cohort))
            .collect()
    }

    async fn get_by_id(&self, student_id: Uuid) -> Result<StudentView, StudentQueryError> {
        let (student, cohort) = StudentEntity::find_by_id(student_id)
            .find_also_related(cohorts::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(StudentQueryError::NotFound)?;

        model_to_view(student, cohort)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Students joined with their cohort, in insertion order. `id` breaks ties.
fn list_query() -> SelectTwo<StudentEntity, cohorts::Entity> {
    StudentEntity::find()
        .find_also_related(cohorts::Entity)
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

/// A dangling reference resolves to no row and reads back as `None`.
fn model_to_view(
    model: StudentModel,
    cohort: Option<cohorts::Model>,
) -> Result<StudentView, StudentQueryError> {
    Ok(StudentView {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        linkedin_url: model.linkedin_url,
        languages: from_json(&model.languages)?,
        program: model.program,
        background: model.background,
        image: model.image,
        cohort: cohort.map(cohorts::Model::to_result),
        projects: from_json(&model.projects)?,
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, StudentQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| StudentQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> StudentQueryError {
    StudentQueryError::DatabaseError(e.to_string())
}
