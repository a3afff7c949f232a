pub mod student_query;
pub mod student_repository;

pub use student_query::{StudentQuery, StudentQueryError, StudentView};
pub use student_repository::{
    CreateStudentData, PatchStudentData, ProjectDetails, StudentProject, StudentRepository,
    StudentRepositoryError, StudentResult,
};
