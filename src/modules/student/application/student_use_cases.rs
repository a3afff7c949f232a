use std::sync::Arc;

use crate::student::application::ports::incoming::use_cases::{
    CreateStudentUseCase, DeleteStudentUseCase, GetSingleStudentUseCase, GetStudentsByCohortUseCase,
    GetStudentsUseCase, PatchStudentUseCase,
};

#[derive(Clone)]
pub struct StudentUseCases {
    pub create: Arc<dyn CreateStudentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetStudentsUseCase + Send + Sync>,
    pub get_by_cohort: Arc<dyn GetStudentsByCohortUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleStudentUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchStudentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteStudentUseCase + Send + Sync>,
}
