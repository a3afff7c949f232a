mod create_student_service;
mod delete_student_service;
mod get_single_student_service;
mod get_students_by_cohort_service;
mod get_students_service;
mod patch_student_service;

pub use create_student_service::CreateStudentService;
pub use delete_student_service::DeleteStudentService;
pub use get_single_student_service::GetSingleStudentService;
pub use get_students_by_cohort_service::GetStudentsByCohortService;
pub use get_students_service::GetStudentsService;
pub use patch_student_service::PatchStudentService;
