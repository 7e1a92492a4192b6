use log::LevelFilter;

pub const ENGINE_NAME: &str = "Raymarcher";

/// Environment variables that can be used to configure the renderer
#[allow(non_snake_case)]
pub mod ENV {
    /// Set to one of `off`, `error`, `warn`, `info`, `debug` or `trace` to override the log level
    pub const LOG_LEVEL: &str = "RAYMARCHER_LOG_LEVEL";
}

/// Log level filter. Log messages with lower levels than this will not be displayed.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Number of primitive slots in the scene.
///
/// _Must match the length of the `objects` array declared by the scene shader. The declaration
/// generated by `renderer::shader_interfaces::glsl_interface` uses this value._
pub const SCENE_CAPACITY: usize = 32;

/// Smooth-minimum blending is off until the debug menu turns it on
pub const DEFAULT_SMOOTHING_ENABLED: bool = false;
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.5;
