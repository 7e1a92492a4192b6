use super::shader_interfaces::scene_uniforms::UniformValue;
use std::fmt;

/// Identifies a linked GPU program (e.g. the GL program name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

impl fmt::Display for ProgramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An already compiled and linked GPU program whose uniforms can be looked up by name.
///
/// Implementations wrap a graphics API. Compiling and linking happen before one of these is
/// created, and the program must stay valid for as long as the implementation is alive.
pub trait ShaderProgram {
    /// Resolved uniform location
    type Location: Clone + fmt::Debug;

    fn handle(&self) -> ProgramHandle;

    /// Makes this the active program. Uniform writes only reach the active program.
    fn use_program(&mut self);

    /// Returns `None` if the program doesn't declare (or the compiler optimized out) `name`.
    fn uniform_location(&self, name: &str) -> Option<Self::Location>;

    /// Writes `value` to `location` of the active program.
    fn write_uniform(&mut self, location: &Self::Location, value: UniformValue);
}
