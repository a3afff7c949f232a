mod create_student;
mod delete_student;
mod get_single_student;
mod get_students;
mod get_students_by_cohort;
mod patch_student;

pub use create_student::{CreateStudentError, CreateStudentUseCase};
pub use delete_student::{DeleteStudentError, DeleteStudentUseCase};
pub use get_single_student::{GetSingleStudentError, GetSingleStudentUseCase};
pub use get_students::{GetStudentsError, GetStudentsUseCase};
pub use get_students_by_cohort::{GetStudentsByCohortError, GetStudentsByCohortUseCase};
pub use patch_student::{PatchStudentError, PatchStudentUseCase};
