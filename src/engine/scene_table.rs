use super::{commands::SceneCommand, primitives::primitive::PrimitiveDescriptor};
use crate::{
    config,
    helper::more_errors::SceneError,
    renderer::{
        shader_interfaces::camera_uniforms::CameraUniforms, shader_program::ShaderProgram,
        uniform_binder::UniformBinder,
    },
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Global smooth-minimum blending parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingSettings {
    pub enabled: bool,
    pub factor: f32,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            enabled: config::DEFAULT_SMOOTHING_ENABLED,
            factor: config::DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

/// Fixed capacity list of primitives mirrored into the `objects` uniform array of a shader
/// program. A primitive's index in the table is its index in the shader array.
///
/// Should only be one per program.
pub struct SceneTable<P: ShaderProgram> {
    /// Live entries. Never longer than [`config::SCENE_CAPACITY`].
    objects: Vec<PrimitiveDescriptor>,
    smoothing: SmoothingSettings,
    binder: UniformBinder<P>,
}

impl<P: ShaderProgram> SceneTable<P> {
    /// Takes ownership of an already linked program and writes the initial globals to it
    pub fn new(program: P) -> Self {
        let mut scene = Self {
            objects: Vec::with_capacity(config::SCENE_CAPACITY),
            smoothing: SmoothingSettings::default(),
            binder: UniformBinder::new(program),
        };
        scene.update_globals();
        scene
    }

    /// Appends `descriptor`, uploads its slot and the globals, then returns its index.
    ///
    /// Fails with [`SceneError::CapacityExceeded`] when all slots are taken, in which case nothing
    /// is written. This means the scene doesn't fit the shader and should be treated as fatal.
    pub fn add_object(&mut self, descriptor: PrimitiveDescriptor) -> Result<usize, SceneError> {
        if self.objects.len() >= self.capacity() {
            let e = SceneError::CapacityExceeded {
                capacity: self.capacity(),
            };
            error!("failed to add {} primitive: {}", descriptor.kind(), e);
            return Err(e);
        }

        let index = self.objects.len();
        self.objects.push(descriptor);
        debug!("added {} primitive at index {}", descriptor.kind(), index);

        self.binder.sync_object(index, &descriptor);
        self.update_globals();
        Ok(index)
    }

    /// Calls [`Self::add_object`] for each descriptor, stopping at the first failure
    pub fn add_objects(
        &mut self,
        descriptors: impl IntoIterator<Item = PrimitiveDescriptor>,
    ) -> Result<Vec<usize>, SceneError> {
        let mut indices = Vec::new();
        for descriptor in descriptors {
            indices.push(self.add_object(descriptor)?);
        }
        Ok(indices)
    }

    /// Replaces the live entry at `index` and uploads only that slot. The kind may change.
    pub fn update_object(
        &mut self,
        index: usize,
        descriptor: PrimitiveDescriptor,
    ) -> Result<(), SceneError> {
        let count = self.count();
        let Some(object) = self.objects.get_mut(index) else {
            let e = SceneError::OutOfBounds { index, count };
            error!("failed to update primitive: {}", e);
            return Err(e);
        };

        *object = descriptor;
        debug!("updated primitive {} to {}", index, descriptor.kind());

        self.binder.sync_object(index, &descriptor);
        Ok(())
    }

    /// Writes the object count and smoothing parameters
    pub fn update_globals(&mut self) {
        self.binder.sync_globals(self.objects.len(), &self.smoothing);
    }

    pub fn set_smoothing(&mut self, enabled: bool, factor: f32) {
        self.smoothing = SmoothingSettings { enabled, factor };
        self.update_globals();
    }

    /// Rewrites every live slot and the globals
    pub fn resync_all(&mut self) {
        for (index, descriptor) in self.objects.iter().enumerate() {
            self.binder.sync_object(index, descriptor);
        }
        self.update_globals();
    }

    /// Swaps the program (e.g. after a shader reload) and uploads the whole scene to the new one.
    /// Returns the old program.
    pub fn replace_program(&mut self, program: P) -> P {
        let old_program = self.binder.replace_program(program);
        self.resync_all();
        old_program
    }

    /// Writes the per-frame camera uniforms. The render driver calls this before each draw.
    pub fn write_frame_uniforms(&mut self, camera: &CameraUniforms) {
        self.binder.sync_frame(camera);
    }

    pub fn apply_commands(
        &mut self,
        commands: impl IntoIterator<Item = SceneCommand>,
    ) -> Result<(), SceneError> {
        for command in commands {
            match command {
                SceneCommand::UpdateObject { index, descriptor } => {
                    self.update_object(index, descriptor)?
                }
                SceneCommand::SetSmoothing { enabled, factor } => {
                    self.set_smoothing(enabled, factor)
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        config::SCENE_CAPACITY
    }

    /// Live entries in index order
    pub fn objects(&self) -> &[PrimitiveDescriptor] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&PrimitiveDescriptor> {
        self.objects.get(index)
    }

    pub fn smoothing(&self) -> SmoothingSettings {
        self.smoothing
    }

    pub fn program(&self) -> &P {
        self.binder.program()
    }

    pub fn program_mut(&mut self) -> &mut P {
        self.binder.program_mut()
    }
}

// ~~ Tests ~~

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::primitives::primitive_kind::PrimitiveKind,
        renderer::{
            headless_program::HeadlessProgram,
            shader_interfaces::scene_uniforms::UniformValue, shader_program::ProgramHandle,
        },
    };
    use glam::{Vec2, Vec3, Vec4};

    fn new_scene() -> SceneTable<HeadlessProgram> {
        SceneTable::new(
            HeadlessProgram::with_scene_interface(ProgramHandle(1), config::SCENE_CAPACITY)
                .recording_writes(),
        )
    }

    fn nth_descriptor(n: usize) -> PrimitiveDescriptor {
        let position = Vec3::new(n as f32, 0., -(n as f32));
        match n % 4 {
            0 => PrimitiveDescriptor::sphere(position, n as u32, 1. + n as f32),
            1 => PrimitiveDescriptor::cuboid(position, n as u32, Vec3::splat(n as f32)),
            2 => PrimitiveDescriptor::torus(position, n as u32, Vec2::new(n as f32, 0.25)),
            _ => PrimitiveDescriptor::plane(n as u32, Vec4::new(0., 1., 0., n as f32)),
        }
    }

    #[test]
    fn starts_empty_with_globals_written() {
        let scene = new_scene();
        assert_eq!(scene.count(), 0);
        assert_eq!(
            scene.program().uniform("nb_objects"),
            Some(UniformValue::UInt(0))
        );
        assert_eq!(
            scene.program().uniform("enable_smoothing"),
            Some(UniformValue::Bool(config::DEFAULT_SMOOTHING_ENABLED))
        );
    }

    #[test]
    fn add_appends_in_order() {
        let mut scene = new_scene();
        for n in 0..config::SCENE_CAPACITY {
            let descriptor = nth_descriptor(n);
            let index = scene.add_object(descriptor).unwrap();
            assert_eq!(index, n);
            assert_eq!(scene.count(), n + 1);
            assert_eq!(scene.objects()[scene.count() - 1], descriptor);
            assert_eq!(
                scene.program().uniform("nb_objects"),
                Some(UniformValue::UInt(n as u32 + 1))
            );
        }
    }

    #[test]
    fn add_past_capacity_fails_without_writes() {
        let mut scene = new_scene();
        for n in 0..config::SCENE_CAPACITY {
            scene.add_object(nth_descriptor(n)).unwrap();
        }
        let before = scene.program().snapshot();
        scene.program_mut().take_write_log();

        let res = scene.add_object(PrimitiveDescriptor::sphere(Vec3::ONE, 9, 9.));
        assert_eq!(
            res,
            Err(SceneError::CapacityExceeded {
                capacity: config::SCENE_CAPACITY
            })
        );
        assert_eq!(scene.count(), config::SCENE_CAPACITY);
        assert_eq!(scene.objects()[0], nth_descriptor(0));
        assert_eq!(scene.objects()[31], nth_descriptor(31));
        assert!(scene.program_mut().take_write_log().is_empty());
        assert_eq!(scene.program().snapshot(), before);
    }

    #[test]
    fn add_objects_stops_at_capacity() {
        let mut scene = new_scene();
        let res = scene.add_objects((0..config::SCENE_CAPACITY + 3).map(nth_descriptor));
        assert!(matches!(res, Err(SceneError::CapacityExceeded { .. })));
        assert_eq!(scene.count(), config::SCENE_CAPACITY);
    }

    #[test]
    fn update_only_touches_one_slot() {
        let mut scene = new_scene();
        for n in 0..4 {
            scene.add_object(nth_descriptor(n)).unwrap();
        }
        let before = scene.program().snapshot();
        scene.program_mut().take_write_log();

        let replacement = PrimitiveDescriptor::torus(Vec3::new(7., 7., 7.), 5, Vec2::new(2., 1.));
        scene.update_object(1, replacement).unwrap();

        let log = scene.program_mut().take_write_log();
        assert!(log.iter().all(|name| name.starts_with("objects[1].")));

        let after = scene.program().snapshot();
        for ((name, old), (_, new)) in before.iter().zip(after.iter()) {
            if !name.starts_with("objects[1].") {
                assert_eq!(old, new, "{} changed", name);
            }
        }
        assert_eq!(scene.object(1), Some(&replacement));
        assert_eq!(
            scene.program().uniform("objects[1].type"),
            Some(UniformValue::UInt(PrimitiveKind::Torus.type_code()))
        );
        assert_eq!(
            scene.program().uniform("objects[1].torus"),
            Some(UniformValue::Vec2(Vec2::new(2., 1.)))
        );
        // payload of the previous (box) occupant stays behind, the shader branches on type
        assert_eq!(
            scene.program().uniform("objects[1].size"),
            Some(UniformValue::Vec3(Vec3::splat(1.)))
        );
    }

    #[test]
    fn update_out_of_range_fails() {
        let mut scene = new_scene();
        scene.add_object(nth_descriptor(0)).unwrap();
        let res = scene.update_object(1, nth_descriptor(1));
        assert_eq!(res, Err(SceneError::OutOfBounds { index: 1, count: 1 }));
        assert_eq!(scene.objects(), &[nth_descriptor(0)]);
        assert_eq!(scene.program().uniform("objects[1].type"), None);
    }

    #[test]
    fn update_rebinds_program() {
        let mut scene = new_scene();
        scene.add_object(nth_descriptor(0)).unwrap();
        // e.g. the gui renderer bound its own program in between
        scene.program_mut().deactivate();
        scene.update_object(0, nth_descriptor(4)).unwrap();
        scene.program_mut().deactivate();
        scene.update_globals();
        assert!(scene.program().is_active());
    }

    #[test]
    fn update_globals_is_idempotent() {
        let mut scene = new_scene();
        scene.add_object(nth_descriptor(0)).unwrap();
        scene.set_smoothing(true, 0.3);

        scene.update_globals();
        let first = scene.program().snapshot();
        scene.update_globals();
        assert_eq!(scene.program().snapshot(), first);
        assert_eq!(
            scene.program().uniform("smoothing"),
            Some(UniformValue::Float(0.3))
        );
        assert_eq!(
            scene.program().uniform("enable_smoothing"),
            Some(UniformValue::Bool(true))
        );
    }

    #[test]
    fn sphere_then_plane() {
        let mut scene = new_scene();

        scene
            .add_object(PrimitiveDescriptor::sphere(Vec3::new(3., 3., 0.), 1, 1.))
            .unwrap();
        assert_eq!(scene.count(), 1);
        let program = scene.program();
        assert_eq!(program.uniform("objects[0].type"), Some(UniformValue::UInt(0)));
        assert_eq!(
            program.uniform("objects[0].pos"),
            Some(UniformValue::Vec3(Vec3::new(3., 3., 0.)))
        );
        assert_eq!(
            program.uniform("objects[0].material"),
            Some(UniformValue::UInt(1))
        );
        assert_eq!(
            program.uniform("objects[0].radius"),
            Some(UniformValue::Float(1.))
        );
        assert_eq!(program.uniform("nb_objects"), Some(UniformValue::UInt(1)));

        scene
            .add_object(PrimitiveDescriptor::plane(3, Vec4::new(0., 1., 0., 1.)))
            .unwrap();
        assert_eq!(scene.count(), 2);
        let program = scene.program();
        assert_eq!(program.uniform("objects[1].type"), Some(UniformValue::UInt(3)));
        assert_eq!(
            program.uniform("objects[1].material"),
            Some(UniformValue::UInt(3))
        );
        assert_eq!(
            program.uniform("objects[1].normal"),
            Some(UniformValue::Vec4(Vec4::new(0., 1., 0., 1.)))
        );
        assert_eq!(program.uniform("objects[1].pos"), None);
        assert_eq!(program.uniform("nb_objects"), Some(UniformValue::UInt(2)));
    }

    #[test]
    fn replace_program_uploads_whole_scene() {
        let mut scene = new_scene();
        scene.add_objects((0..3).map(nth_descriptor)).unwrap();
        scene.set_smoothing(true, 0.1);

        let old = scene.replace_program(HeadlessProgram::with_scene_interface(
            ProgramHandle(2),
            config::SCENE_CAPACITY,
        ));
        assert_eq!(old.handle(), ProgramHandle(1));

        let program = scene.program();
        assert_eq!(program.handle(), ProgramHandle(2));
        assert_eq!(program.uniform("nb_objects"), Some(UniformValue::UInt(3)));
        assert_eq!(program.uniform("smoothing"), Some(UniformValue::Float(0.1)));
        assert_eq!(
            program.uniform("objects[2].torus"),
            Some(UniformValue::Vec2(Vec2::new(2., 0.25)))
        );
    }

    #[test]
    fn apply_commands() {
        let mut scene = new_scene();
        scene.add_object(nth_descriptor(0)).unwrap();
        let commands = [
            SceneCommand::SetSmoothing {
                enabled: true,
                factor: 0.7,
            },
            SceneCommand::UpdateObject {
                index: 0,
                descriptor: nth_descriptor(3),
            },
        ];
        scene.apply_commands(commands).unwrap();
        assert_eq!(scene.smoothing().factor, 0.7);
        assert_eq!(scene.objects()[0].kind(), PrimitiveKind::Plane);

        let res = scene.apply_commands([SceneCommand::UpdateObject {
            index: 5,
            descriptor: nth_descriptor(0),
        }]);
        assert!(matches!(res, Err(SceneError::OutOfBounds { index: 5, .. })));
    }
}
