pub mod config_ui;
pub mod scene_editor;
