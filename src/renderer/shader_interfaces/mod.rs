pub mod camera_uniforms;
pub mod glsl_interface;
pub mod scene_uniforms;
