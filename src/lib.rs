//! Scene model and GPU uniform synchronization for a screen-space raymarching renderer.
//!
//! A [`SceneTable`](engine::scene_table::SceneTable) owns a fixed-capacity list of implicit
//! surface primitives and mirrors every mutation into the uniforms of a bound
//! [`ShaderProgram`](renderer::shader_program::ShaderProgram). Window creation, input handling and
//! shader compilation are left to the host application.

pub mod config;
pub mod engine;
pub mod helper;
pub mod renderer;
pub mod user_interface;
