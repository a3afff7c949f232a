use std::sync::Arc;

use crate::cohort::application::ports::incoming::use_cases::{
    CreateCohortUseCase, DeleteCohortUseCase, GetCohortsUseCase, GetSingleCohortUseCase,
    PatchCohortUseCase,
};

#[derive(Clone)]
pub struct CohortUseCases {
    pub create: Arc<dyn CreateCohortUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCohortsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCohortUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCohortUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCohortUseCase + Send + Sync>,
}
