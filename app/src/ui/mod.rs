pub mod menu;
pub mod prompt;
pub mod record_panel;
