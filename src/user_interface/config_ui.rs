/// Step size of drag values in the debug menu
pub const DRAG_INC: f64 = 0.02;

pub const MAX_SMOOTHING_FACTOR: f32 = 2.;
pub const MAX_PRIMITIVE_SIZE: f32 = 100.;

pub const DEBUG_WINDOW_TITLE: &str = "Debug Menu";
