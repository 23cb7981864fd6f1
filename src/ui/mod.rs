pub mod app;
pub mod form_panel;
pub mod plan_panel;
pub mod settings;
pub mod settings_io;
