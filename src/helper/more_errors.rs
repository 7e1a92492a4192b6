use std::{error, fmt};

/// Mutations that would break the agreement between the host scene table and the fixed size
/// `objects` array declared by the shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// Every slot is occupied
    CapacityExceeded { capacity: usize },
    /// `index` doesn't refer to a live slot
    OutOfBounds { index: usize, count: usize },
}
impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => write!(
                f,
                "scene capacity of {} primitives exceeded. the shader objects array can't hold more",
                capacity
            ),
            Self::OutOfBounds { index, count } => {
                write!(f, "index {} out of bounds. count = {}", index, count)
            }
        }
    }
}
impl error::Error for SceneError {}
