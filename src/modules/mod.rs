pub mod cohort;
pub mod student;
