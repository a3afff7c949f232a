pub mod cohort_use_cases;
pub mod ports;
pub mod service;
