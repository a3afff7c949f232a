mod create_student;
mod delete_student;
mod get_single_student;
mod get_students;
mod get_students_by_cohort;
mod update_student;

pub use create_student::{__path_create_student_handler, create_student_handler, CreateStudentRequest};
pub use delete_student::{__path_delete_student_handler, delete_student_handler};
pub use get_single_student::{__path_get_student_by_id_handler, get_student_by_id_handler};
pub use get_students::{__path_get_students_handler, get_students_handler};
pub use get_students_by_cohort::{
    __path_get_students_by_cohort_handler, get_students_by_cohort_handler,
};
pub use update_student::{
    __path_update_student_handler, update_student_handler, UpdateStudentRequest,
};
