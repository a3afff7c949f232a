//! Port implementations over a shared in-memory store, used to drive the real
//! services and routes end to end without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::cohort::application::cohort_use_cases::CohortUseCases;
use crate::cohort::application::ports::outgoing::{
    CohortQuery, CohortQueryError, CohortRepository, CohortRepositoryError, CohortResult,
    CreateCohortData, PatchCohortData,
};
use crate::cohort::application::service::{
    CreateCohortService, DeleteCohortService, GetCohortsService, GetSingleCohortService,
    PatchCohortService,
};
use crate::shared::patch_field::PatchField;
use crate::student::application::ports::outgoing::{
    CreateStudentData, PatchStudentData, StudentQuery, StudentQueryError, StudentRepository,
    StudentRepositoryError, StudentResult, StudentView,
};
use crate::student::application::service::{
    CreateStudentService, DeleteStudentService, GetSingleStudentService,
    GetStudentsByCohortService, GetStudentsService, PatchStudentService,
};
use crate::student::application::student_use_cases::StudentUseCases;

#[derive(Default)]
struct Tables {
    cohorts: Vec<CohortResult>,
    students: Vec<StudentResult>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    /// Real services wired over this store.
    pub fn use_cases(&self) -> (CohortUseCases, StudentUseCases) {
        let cohorts = CohortUseCases {
            create: Arc::new(CreateCohortService::new(self.clone())),
            get_list: Arc::new(GetCohortsService::new(self.clone())),
            get_single: Arc::new(GetSingleCohortService::new(self.clone())),
            patch: Arc::new(PatchCohortService::new(self.clone())),
            delete: Arc::new(DeleteCohortService::new(self.clone())),
        };

        let students = StudentUseCases {
            create: Arc::new(CreateStudentService::new(self.clone())),
            get_list: Arc::new(GetStudentsService::new(self.clone())),
            get_by_cohort: Arc::new(GetStudentsByCohortService::new(self.clone())),
            get_single: Arc::new(GetSingleStudentService::new(self.clone())),
            patch: Arc::new(PatchStudentService::new(self.clone())),
            delete: Arc::new(DeleteStudentService::new(self.clone())),
        };

        (cohorts, students)
    }

    pub fn student_count(&self) -> usize {
        self.tables.lock().unwrap().students.len()
    }

    fn join(tables: &Tables, student: &StudentResult) -> StudentView {
        let cohort = student
            .cohort
            .and_then(|id| tables.cohorts.iter().find(|c| c.id == id).cloned());

        StudentView {
            id: student.id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            linkedin_url: student.linkedin_url.clone(),
            languages: student.languages.clone(),
            program: student.program.clone(),
            background: student.background.clone(),
            image: student.image.clone(),
            cohort,
            projects: student.projects.clone(),
        }
    }
}

fn merge_list<T>(field: PatchField<Vec<T>>, current: Vec<T>) -> Vec<T> {
    match field {
        PatchField::Unset => current,
        PatchField::Null => Vec::new(),
        PatchField::Value(items) => items,
    }
}

// ============================================================
// Cohorts
// ============================================================

#[async_trait]
impl CohortRepository for InMemoryStore {
    async fn create_cohort(
        &self,
        data: CreateCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        let cohort = CohortResult {
            id: Uuid::new_v4(),
            cohort_slug: data.cohort_slug,
            cohort_name: data.cohort_name,
            program: data.program,
            format: data.format,
            campus: data.campus,
            start_date: data.start_date,
            end_date: data.end_date,
            in_progress: data.in_progress,
            program_manager: data.program_manager,
            lead_teacher: data.lead_teacher,
            total_hours: data.total_hours,
        };

        self.tables.lock().unwrap().cohorts.push(cohort.clone());
        Ok(cohort)
    }

    async fn patch_cohort(
        &self,
        cohort_id: Uuid,
        data: PatchCohortData,
    ) -> Result<CohortResult, CohortRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let cohort = tables
            .cohorts
            .iter_mut()
            .find(|c| c.id == cohort_id)
            .ok_or(CohortRepositoryError::NotFound)?;

        cohort.cohort_slug = data.cohort_slug.apply_to(cohort.cohort_slug.take());
        cohort.cohort_name = data.cohort_name.apply_to(cohort.cohort_name.take());
        cohort.program = data.program.apply_to(cohort.program.take());
        cohort.format = data.format.apply_to(cohort.format.take());
        cohort.campus = data.campus.apply_to(cohort.campus.take());
        cohort.start_date = data.start_date.apply_to(cohort.start_date);
        cohort.end_date = data.end_date.apply_to(cohort.end_date);
        cohort.in_progress = data.in_progress.apply_to(cohort.in_progress);
        cohort.program_manager = data.program_manager.apply_to(cohort.program_manager.take());
        cohort.lead_teacher = data.lead_teacher.apply_to(cohort.lead_teacher.take());
        cohort.total_hours = data.total_hours.apply_to(cohort.total_hours);

        Ok(cohort.clone())
    }

    async fn delete_cohort(&self, cohort_id: Uuid) -> Result<(), CohortRepositoryError> {
        self.tables
            .lock()
            .unwrap()
            .cohorts
            .retain(|c| c.id != cohort_id);
        Ok(())
    }
}

#[async_trait]
impl CohortQuery for InMemoryStore {
    async fn list_cohorts(&self) -> Result<Vec<CohortResult>, CohortQueryError> {
        Ok(self.tables.lock().unwrap().cohorts.clone())
    }

    async fn get_by_id(&self, cohort_id: Uuid) -> Result<CohortResult, CohortQueryError> {
        self.tables
            .lock()
            .unwrap()
            .cohorts
            .iter()
            .find(|c| c.id == cohort_id)
            .cloned()
            .ok_or(CohortQueryError::NotFound)
    }
}

// ============================================================
// Students
// ============================================================

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn create_student(
        &self,
        data: CreateStudentData,
    ) -> Result<StudentResult, StudentRepositoryError> {
        let student = StudentResult {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            linkedin_url: data.linkedin_url,
            languages: data.languages,
            program: data.program,
            background: data.background,
            image: data.image,
            cohort: data.cohort,
            projects: data.projects,
        };

        self.tables.lock().unwrap().students.push(student.clone());
        Ok(student)
    }

    async fn patch_student(
        &self,
        student_id: Uuid,
        data: PatchStudentData,
    ) -> Result<StudentResult, StudentRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let student = tables
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or(StudentRepositoryError::NotFound)?;

        student.first_name = data.first_name.apply_to(student.first_name.take());
        student.last_name = data.last_name.apply_to(student.last_name.take());
        student.email = data.email.apply_to(student.email.take());
        student.phone = data.phone.apply_to(student.phone.take());
        student.linkedin_url = data.linkedin_url.apply_to(student.linkedin_url.take());
        student.languages = merge_list(data.languages, std::mem::take(&mut student.languages));
        student.program = data.program.apply_to(student.program.take());
        student.background = data.background.apply_to(student.background.take());
        student.image = data.image.apply_to(student.image.take());
        student.cohort = data.cohort.apply_to(student.cohort);
        student.projects = merge_list(data.projects, std::mem::take(&mut student.projects));

        Ok(student.clone())
    }

    async fn delete_student(&self, student_id: Uuid) -> Result<(), StudentRepositoryError> {
        self.tables
            .lock()
            .unwrap()
            .students
            .retain(|s| s.id != student_id);
        Ok(())
    }
}

#[async_trait]
impl StudentQuery for InMemoryStore {
    async fn list_students(&self) -> Result<Vec<StudentView>, StudentQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .students
            .iter()
            .map(|s| Self::join(&tables, s))
            .collect())
    }

    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<StudentView>, StudentQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .students
            .iter()
            .filter(|s| s.cohort == Some(cohort_id))
            .map(|s| Self::join(&tables, s))
            .collect())
    }

    async fn get_by_id(&self, student_id: Uuid) -> Result<StudentView, StudentQueryError> {
        let tables = self.tables.lock().unwrap();
        tables
            .students
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| Self::join(&tables, s))
            .ok_or(StudentQueryError::NotFound)
    }
}
