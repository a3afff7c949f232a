pub mod ports;
pub mod service;
pub mod student_use_cases;
