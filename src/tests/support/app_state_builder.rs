use crate::cohort::application::cohort_use_cases::CohortUseCases;
use crate::cohort::application::ports::incoming::use_cases::{
    CreateCohortUseCase, DeleteCohortUseCase, GetCohortsUseCase, GetSingleCohortUseCase,
    PatchCohortUseCase,
};
use crate::student::application::ports::incoming::use_cases::{
    CreateStudentUseCase, DeleteStudentUseCase, GetSingleStudentUseCase,
    GetStudentsByCohortUseCase, GetStudentsUseCase, PatchStudentUseCase,
};
use crate::student::application::student_use_cases::StudentUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a harmless stub: lists are empty, lookups are
/// not found, deletes succeed and creates fail.
pub struct TestAppStateBuilder {
    cohort: CohortUseCases,
    student: StudentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            cohort: CohortUseCases {
                create: Arc::new(StubCreateCohortUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetCohortsUseCase::success(vec![])),
                get_single: Arc::new(StubGetSingleCohortUseCase::not_found()),
                patch: Arc::new(DefaultStubPatchCohortUseCase),
                delete: Arc::new(StubDeleteCohortUseCase::default()),
            },
            student: StudentUseCases {
                create: Arc::new(StubCreateStudentUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetStudentsUseCase::success(vec![])),
                get_by_cohort: Arc::new(StubGetStudentsByCohortUseCase::success(vec![])),
                get_single: Arc::new(StubGetSingleStudentUseCase::not_found()),
                patch: Arc::new(DefaultStubPatchStudentUseCase),
                delete: Arc::new(StubDeleteStudentUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ---------------- cohort ----------------

    pub fn with_create_cohort(
        mut self,
        uc: impl CreateCohortUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cohort.create = Arc::new(uc);
        self
    }

    pub fn with_get_cohorts(mut self, uc: impl GetCohortsUseCase + Send + Sync + 'static) -> Self {
        self.cohort.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_cohort(
        mut self,
        uc: impl GetSingleCohortUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cohort.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_cohort(mut self, uc: impl PatchCohortUseCase + Send + Sync + 'static) -> Self {
        self.cohort.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_cohort(
        mut self,
        uc: impl DeleteCohortUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cohort.delete = Arc::new(uc);
        self
    }

    // ---------------- student ----------------

    pub fn with_create_student(
        mut self,
        uc: impl CreateStudentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.student.create = Arc::new(uc);
        self
    }

    pub fn with_get_students(mut self, uc: impl GetStudentsUseCase + Send + Sync + 'static) -> Self {
        self.student.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_students_by_cohort(
        mut self,
        uc: impl GetStudentsByCohortUseCase + Send + Sync + 'static,
    ) -> Self {
        self.student.get_by_cohort = Arc::new(uc);
        self
    }

    pub fn with_get_single_student(
        mut self,
        uc: impl GetSingleStudentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.student.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_student(
        mut self,
        uc: impl PatchStudentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.student.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_student(
        mut self,
        uc: impl DeleteStudentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.student.delete = Arc::new(uc);
        self
    }

    /// Replace every use case at once, e.g. with services over in-memory ports.
    pub fn with_use_cases(cohort: CohortUseCases, student: StudentUseCases) -> Self {
        Self { cohort, student }
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            cohort: self.cohort,
            student: self.student,
        })
    }
}
