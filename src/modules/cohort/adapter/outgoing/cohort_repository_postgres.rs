use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::cohort::application::ports::outgoing::{
    CohortRepository, CohortRepositoryError, CohortResult, CreateCohortData, PatchCohortData,
};
use crate::shared::patch_field::patch_value;

use super::sea_orm_entity::cohorts::{ActiveModel, Column, Entity, Model};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct CohortRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CohortRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CohortRepository for CohortRepositoryPostgres {
    async fn create_cohort(
        &self,
        data: CreateCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            cohort_slug: Set(data.cohort_slug),
            cohort_name: Set(data.cohort_name),
            program: Set(data.program),
            format: Set(data.format),
            campus: Set(data.campus),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            in_progress: Set(data.in_progress),
            program_manager: Set(data.program_manager),
            lead_teacher: Set(data.lead_teacher),
            total_hours: Set(data.total_hours),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_result())
    }

    async fn patch_cohort(
        &self,
        cohort_id: Uuid,
        data: PatchCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        if data.is_empty() {
            return Entity::find_by_id(cohort_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(Model::to_result)
                .ok_or(CohortRepositoryError::NotFound);
        }

        let model = ActiveModel {
            cohort_slug: patch_value(data.cohort_slug),
            cohort_name: patch_value(data.cohort_name),
            program: patch_value(data.program),
            format: patch_value(data.format),
            campus: patch_value(data.campus),
            start_date: patch_value(data.start_date),
            end_date: patch_value(data.end_date),
            in_progress: patch_value(data.in_progress),
            program_manager: patch_value(data.program_manager),
            lead_teacher: patch_value(data.lead_teacher),
            total_hours: patch_value(data.total_hours),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(cohort_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(Model::to_result)
            .ok_or(CohortRepositoryError::NotFound)
    }

    async fn delete_cohort(&self, cohort_id: Uuid) -> Result<(), CohortRepositoryError> {
        Entity::delete_by_id(cohort_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> CohortRepositoryError {
    CohortRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
