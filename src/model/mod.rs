pub mod catalog;
pub mod form_input;
pub mod lesson_plan;
