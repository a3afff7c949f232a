use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::ports::incoming::use_cases::{
    CreateCohortError, CreateCohortUseCase, DeleteCohortError, DeleteCohortUseCase,
    GetCohortsError, GetCohortsUseCase, GetSingleCohortError, GetSingleCohortUseCase,
    PatchCohortError, PatchCohortUseCase,
};
use crate::cohort::application::ports::outgoing::{
    CohortResult, CreateCohortData, PatchCohortData,
};
use crate::student::application::ports::incoming::use_cases::{
    CreateStudentError, CreateStudentUseCase, DeleteStudentError, DeleteStudentUseCase,
    GetSingleStudentError, GetSingleStudentUseCase, GetStudentsByCohortError,
    GetStudentsByCohortUseCase, GetStudentsError, GetStudentsUseCase, PatchStudentError,
    PatchStudentUseCase,
};
use crate::student::application::ports::outgoing::{
    CreateStudentData, PatchStudentData, StudentResult, StudentView,
};

// ============================================================
// Cohort use cases
// ============================================================

#[derive(Clone)]
pub struct StubCreateCohortUseCase {
    result: Result<CohortResult, CreateCohortError>,
}

impl StubCreateCohortUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateCohortError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateCohortUseCase for StubCreateCohortUseCase {
    async fn execute(&self, _data: CreateCohortData) -> Result<CohortResult, CreateCohortError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetCohortsUseCase {
    result: Result<Vec<CohortResult>, GetCohortsError>,
}

impl StubGetCohortsUseCase {
    pub fn success(data: Vec<CohortResult>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetCohortsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetCohortsUseCase for StubGetCohortsUseCase {
    async fn execute(&self) -> Result<Vec<CohortResult>, GetCohortsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleCohortUseCase {
    result: Result<CohortResult, GetSingleCohortError>,
}

impl StubGetSingleCohortUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleCohortError::NotFound),
        }
    }

    pub fn success(data: CohortResult) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSingleCohortError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetSingleCohortUseCase for StubGetSingleCohortUseCase {
    async fn execute(&self, _cohort_id: Uuid) -> Result<CohortResult, GetSingleCohortError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchCohortUseCase;

#[async_trait]
impl PatchCohortUseCase for DefaultStubPatchCohortUseCase {
    async fn execute(
        &self,
        _cohort_id: Uuid,
        _data: PatchCohortData,
    ) -> Result<CohortResult, PatchCohortError> {
        Err(PatchCohortError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteCohortUseCase {
    error: Option<String>,
}

impl StubDeleteCohortUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl DeleteCohortUseCase for StubDeleteCohortUseCase {
    async fn execute(&self, _cohort_id: Uuid) -> Result<(), DeleteCohortError> {
        match &self.error {
            Some(msg) => Err(DeleteCohortError::RepositoryError(msg.clone())),
            None => Ok(()),
        }
    }
}

// ============================================================
// Student use cases
// ============================================================

#[derive(Clone)]
pub struct StubCreateStudentUseCase {
    result: Result<StudentResult, CreateStudentError>,
}

impl StubCreateStudentUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateStudentError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateStudentUseCase for StubCreateStudentUseCase {
    async fn execute(
        &self,
        _data: CreateStudentData,
    ) -> Result<StudentResult, CreateStudentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetStudentsUseCase {
    result: Result<Vec<StudentView>, GetStudentsError>,
}

impl StubGetStudentsUseCase {
    pub fn success(data: Vec<StudentView>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetStudentsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetStudentsUseCase for StubGetStudentsUseCase {
    async fn execute(&self) -> Result<Vec<StudentView>, GetStudentsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetStudentsByCohortUseCase {
    result: Result<Vec<StudentView>, GetStudentsByCohortError>,
}

impl StubGetStudentsByCohortUseCase {
    pub fn success(data: Vec<StudentView>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetStudentsByCohortError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetStudentsByCohortUseCase for StubGetStudentsByCohortUseCase {
    async fn execute(
        &self,
        _cohort_id: Uuid,
    ) -> Result<Vec<StudentView>, GetStudentsByCohortError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleStudentUseCase {
    result: Result<StudentView, GetSingleStudentError>,
}

impl StubGetSingleStudentUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleStudentError::NotFound),
        }
    }

    pub fn success(view: StudentView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSingleStudentError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetSingleStudentUseCase for StubGetSingleStudentUseCase {
    async fn execute(&self, _student_id: Uuid) -> Result<StudentView, GetSingleStudentError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchStudentUseCase;

#[async_trait]
impl PatchStudentUseCase for DefaultStubPatchStudentUseCase {
    async fn execute(
        &self,
        _student_id: Uuid,
        _data: PatchStudentData,
    ) -> Result<StudentResult, PatchStudentError> {
        Err(PatchStudentError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteStudentUseCase {
    error: Option<String>,
}

impl StubDeleteStudentUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl DeleteStudentUseCase for StubDeleteStudentUseCase {
    async fn execute(&self, _student_id: Uuid) -> Result<(), DeleteStudentError> {
        match &self.error {
            Some(msg) => Err(DeleteStudentError::RepositoryError(msg.clone())),
            None => Ok(()),
        }
    }
}
