pub mod api;
pub mod date_input;
pub mod patch_field;
