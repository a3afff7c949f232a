use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::cohort::adapter::outgoing::sea_orm_entity::cohorts;
use crate::cohort::application::ports::outgoing::{
    CohortQuery, CohortQueryError, CohortRepository, CohortRepositoryError, CohortResult,
    CreateCohortData, PatchCohortData,
};

pub fn sample_cohort(name: &str) -> CohortResult {
    CohortResult {
        id: Uuid::new_v4(),
        cohort_slug: Some(name.to_lowercase().replace(' ', "-")),
        cohort_name: Some(name.to_string()),
        program: Some("Web Dev".to_string()),
        format: Some("Full Time".to_string()),
        campus: Some("Berlin".to_string()),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 8),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        in_progress: Some(false),
        program_manager: Some("Sally Daher".to_string()),
        lead_teacher: Some("Florian Aube".to_string()),
        total_hours: Some(360.0),
    }
}

pub fn cohort_model(id: Uuid, name: &str) -> cohorts::Model {
    cohorts::Model {
        id,
        cohort_slug: Some(name.to_lowercase().replace(' ', "-")),
        cohort_name: Some(name.to_string()),
        program: Some("Web Dev".to_string()),
        format: Some("Part Time".to_string()),
        campus: Some("Lisbon".to_string()),
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 9, 27),
        in_progress: Some(true),
        program_manager: None,
        lead_teacher: Some("Florian Aube".to_string()),
        total_hours: Some(480.0),
        created_at: Utc::now().fixed_offset(),
    }
}

// ============================================================
// Repository mock (command side)
// ============================================================

#[derive(Clone)]
pub struct MockCohortRepository {
    result: Result<CohortResult, CohortRepositoryError>,
    created: Arc<Mutex<Option<CreateCohortData>>>,
    deleted: Arc<Mutex<Option<Uuid>>>,
}

impl MockCohortRepository {
    pub fn returning(result: Result<CohortResult, CohortRepositoryError>) -> Self {
        Self {
            result,
            created: Arc::default(),
            deleted: Arc::default(),
        }
    }

    pub fn last_created(&self) -> Option<CreateCohortData> {
        self.created.lock().unwrap().clone()
    }

    pub fn last_deleted(&self) -> Option<Uuid> {
        *self.deleted.lock().unwrap()
    }
}

#[async_trait]
impl CohortRepository for MockCohortRepository {
    async fn create_cohort(
        &self,
        data: CreateCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        *self.created.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn patch_cohort(
        &self,
        _cohort_id: Uuid,
        _data: PatchCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        self.result.clone()
    }

    async fn delete_cohort(&self, cohort_id: Uuid) -> Result<(), CohortRepositoryError> {
        *self.deleted.lock().unwrap() = Some(cohort_id);
        self.result.clone().map(|_| ())
    }
}

// ============================================================
// Query stub (read side)
// ============================================================

#[derive(Clone)]
pub struct StubCohortQuery {
    result: Result<Vec<CohortResult>, CohortQueryError>,
}

impl StubCohortQuery {
    pub fn with_cohorts(cohorts: Vec<CohortResult>) -> Self {
        Self {
            result: Ok(cohorts),
        }
    }

    pub fn failing(err: CohortQueryError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CohortQuery for StubCohortQuery {
    async fn list_cohorts(&self) -> Result<Vec<CohortResult>, CohortQueryError> {
        self.result.clone()
    }

    async fn get_by_id(&self, cohort_id: Uuid) -> Result<CohortResult, CohortQueryError> {
        self.result
            .clone()?
            .into_iter()
            .find(|c| c.id == cohort_id)
            .ok_or(CohortQueryError::NotFound)
    }
}
