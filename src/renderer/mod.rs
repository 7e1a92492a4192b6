#[cfg(all(feature = "gl", not(target_arch = "wasm32")))]
pub mod gl_program;
pub mod headless_program;
pub mod shader_interfaces;
pub mod shader_program;
pub mod uniform_binder;
