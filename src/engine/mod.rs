pub mod commands;
pub mod demo_scene;
pub mod primitives;
pub mod scene_table;
