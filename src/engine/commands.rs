use super::primitives::primitive::PrimitiveDescriptor;

/// Scene edits requested by the debug menu, applied with
/// [`SceneTable::apply_commands`](super::scene_table::SceneTable::apply_commands)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    UpdateObject {
        index: usize,
        descriptor: PrimitiveDescriptor,
    },
    SetSmoothing {
        enabled: bool,
        factor: f32,
    },
}
