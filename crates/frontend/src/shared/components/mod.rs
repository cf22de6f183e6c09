pub mod status_actions;
pub mod ui;
