use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::patch_field::{patch_value, PatchField};
use crate::student::application::ports::outgoing::{
    CreateStudentData, PatchStudentData, StudentRepository, StudentRepositoryError, StudentResult,
};

use super::sea_orm_entity::students::{ActiveModel, Column, Entity, Model};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct StudentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentRepositoryPostgres {
    async fn create_student(
        &self,
        data: CreateStudentData,
    ) -> Result<StudentResult, StudentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin_url: Set(data.linkedin_url),
            languages: Set(to_json(&data.languages)?),
            program: Set(data.program),
            background: Set(data.background),
            image: Set(data.image),
            cohort_id: Set(data.cohort),
            projects: Set(to_json(&data.projects)?),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(inserted)
    }

    async fn patch_student(
        &self,
        student_id: Uuid,
        data: PatchStudentData,
    ) -> Result<StudentResult, StudentRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(student_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(StudentRepositoryError::NotFound)?;

            return model_to_result(current);
        }

        let model = ActiveModel {
            first_name: patch_value(data.first_name),
            last_name: patch_value(data.last_name),
            email: patch_value(data.email),
            phone: patch_value(data.phone),
            linkedin_url: patch_value(data.linkedin_url),
            languages: patch_list(data.languages)?,
            program: patch_value(data.program),
            background: patch_value(data.background),
            image: patch_value(data.image),
            cohort_id: patch_value(data.cohort),
            projects: patch_list(data.projects)?,
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(student_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(StudentRepositoryError::NotFound)?;

        model_to_result(updated)
    }

    async fn delete_student(&self, student_id: Uuid) -> Result<(), StudentRepositoryError> {
        Entity::delete_by_id(student_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: Model) -> Result<StudentResult, StudentRepositoryError> {
    Ok(StudentResult {
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
        cohort: model.cohort_id,
        projects: from_json(&model.projects)?,
    })
}

/// JSONB list column update: Null stores an empty list.
fn patch_list<T: serde::Serialize>(
    field: PatchField<Vec<T>>,
) -> Result<ActiveValue<serde_json::Value>, StudentRepositoryError> {
    Ok(match field {
        PatchField::Unset => ActiveValue::NotSet,
        PatchField::Null => Set(serde_json::Value::Array(Vec::new())),
        PatchField::Value(items) => Set(to_json(&items)?),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, StudentRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| StudentRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, StudentRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| StudentRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> StudentRepositoryError {
    StudentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
