use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

use crate::cohort::application::ports::outgoing::{CohortQuery, CohortQueryError, CohortResult};

// SeaORM entity
use super::sea_orm_entity::cohorts::{Column, Entity as CohortEntity, Model as CohortModel};

#[derive(Debug, Clone)]
pub struct CohortQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CohortQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CohortQuery for CohortQueryPostgres {
    async fn list_cohorts(&self) -> Result<Vec<CohortResult>, CohortQueryError> {
        let models: Vec<CohortModel> = list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(CohortModel::to_result).collect())
    }

    async fn get_by_id(&self, cohort_id: Uuid) -> Result<CohortResult, CohortQueryError> {
        CohortEntity::find_by_id(cohort_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(CohortModel::to_result)
            .ok_or(CohortQueryError::NotFound)
    }
}

/// Insertion order, oldest first. `id` breaks ties.
fn list_query() -> Select<CohortEntity> {
    CohortEntity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

fn map_db_err(e: DbErr) -> CohortQueryError {
    CohortQueryError::DatabaseError(e.to_string())
}
