use super::{
    shader_interfaces::{
        camera_uniforms::CameraUniforms,
        scene_uniforms::{
            encode_globals, encode_object, object_uniform_name, GlobalUniform, ObjectField,
            UniformValue,
        },
    },
    shader_program::ShaderProgram,
};
use crate::engine::{primitives::primitive::PrimitiveDescriptor, scene_table::SmoothingSettings};
use ahash::HashMap;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Identifies a uniform of the scene interface without building its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformKey {
    Object { index: usize, field: ObjectField },
    Global(GlobalUniform),
}

impl UniformKey {
    pub fn name(&self) -> String {
        match self {
            Self::Object { index, field } => object_uniform_name(*index, *field),
            Self::Global(global) => global.name().to_string(),
        }
    }
}

/// Mirrors scene state into the uniforms of a [`ShaderProgram`].
///
/// Every sync function activates the program before writing, because other systems (e.g. the gui
/// renderer) may have bound a different program since the last call. Names that don't resolve to
/// a location are skipped so a shader that declares fewer slots still renders what it can.
pub struct UniformBinder<P: ShaderProgram> {
    program: P,
    /// Resolved locations, including names that failed to resolve. Cleared when the program changes.
    location_cache: HashMap<UniformKey, Option<P::Location>>,
}

impl<P: ShaderProgram> UniformBinder<P> {
    pub fn new(program: P) -> Self {
        Self {
            program,
            location_cache: HashMap::default(),
        }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut P {
        &mut self.program
    }

    /// Swaps in a new program and returns the old one. Cached locations belonged to the old
    /// program so they're discarded.
    pub fn replace_program(&mut self, program: P) -> P {
        debug!(
            "replacing scene program {} with {}",
            self.program.handle(),
            program.handle()
        );
        self.location_cache.clear();
        std::mem::replace(&mut self.program, program)
    }

    /// Writes every field owned by `descriptor`'s kind to slot `index`. Fields of other kinds are
    /// left as they are.
    pub fn sync_object(&mut self, index: usize, descriptor: &PrimitiveDescriptor) {
        self.program.use_program();
        for (field, value) in encode_object(descriptor) {
            self.write(UniformKey::Object { index, field }, value);
        }
    }

    /// Writes `nb_objects`, `enable_smoothing` and `smoothing`
    pub fn sync_globals(&mut self, object_count: usize, smoothing: &SmoothingSettings) {
        self.program.use_program();
        for (global, value) in encode_globals(object_count, smoothing) {
            self.write(UniformKey::Global(global), value);
        }
    }

    /// Writes `cam_pos` and `view`. Called once per frame before the draw call.
    pub fn sync_frame(&mut self, camera: &CameraUniforms) {
        self.program.use_program();
        for (global, value) in camera.encoded() {
            self.write(UniformKey::Global(global), value);
        }
    }

    /// Number of names looked up since the program was last set
    pub fn cached_location_count(&self) -> usize {
        self.location_cache.len()
    }

    fn write(&mut self, key: UniformKey, value: UniformValue) {
        if let Some(location) = self.resolve(key) {
            trace!("writing {} = {:?}", key.name(), value);
            self.program.write_uniform(&location, value);
        }
    }

    fn resolve(&mut self, key: UniformKey) -> Option<P::Location> {
        if let Some(cached) = self.location_cache.get(&key) {
            return cached.clone();
        }

        let name = key.name();
        let location = self.program.uniform_location(&name);
        if location.is_none() {
            // only reported on the first lookup, afterwards the miss is cached
            warn!(
                "uniform {} not found in program {}. writes to it will be ignored",
                name,
                self.program.handle()
            );
        }
        self.location_cache.insert(key, location.clone());
        location
    }
}

// ~~ Tests ~~

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{headless_program::HeadlessProgram, shader_program::ProgramHandle};
    use glam::{Mat4, Vec3, Vec4};

    fn binder(capacity: usize) -> UniformBinder<HeadlessProgram> {
        UniformBinder::new(
            HeadlessProgram::with_scene_interface(ProgramHandle(1), capacity).recording_writes(),
        )
    }

    #[test]
    fn sync_object_activates_program() {
        let mut binder = binder(4);
        binder.program_mut().deactivate();
        binder.sync_object(0, &PrimitiveDescriptor::sphere(Vec3::ZERO, 0, 1.));
        assert!(binder.program().is_active());
    }

    #[test]
    fn type_is_written_first() {
        let mut binder = binder(4);
        binder.sync_object(2, &PrimitiveDescriptor::plane(3, Vec4::new(0., 1., 0., 1.)));
        let log = binder.program_mut().take_write_log();
        assert_eq!(
            log,
            ["objects[2].type", "objects[2].material", "objects[2].normal"]
        );
    }

    #[test]
    fn missing_slots_are_skipped() {
        // shader declares 2 slots, host writes to a third
        let mut binder = binder(2);
        binder.sync_object(2, &PrimitiveDescriptor::sphere(Vec3::ONE, 1, 1.));
        assert!(binder.program_mut().take_write_log().is_empty());
        // misses are cached too
        assert_eq!(binder.cached_location_count(), 4);

        binder.sync_object(2, &PrimitiveDescriptor::sphere(Vec3::ONE, 1, 1.));
        assert_eq!(binder.cached_location_count(), 4);
    }

    #[test]
    fn locations_are_cached_per_key() {
        let mut binder = binder(4);
        let sphere = PrimitiveDescriptor::sphere(Vec3::ONE, 1, 1.);
        binder.sync_object(0, &sphere);
        binder.sync_object(0, &sphere);
        assert_eq!(binder.cached_location_count(), 4);
        binder.sync_object(1, &sphere);
        assert_eq!(binder.cached_location_count(), 8);
    }

    #[test]
    fn replacing_program_clears_cache() {
        let mut binder = binder(4);
        binder.sync_object(0, &PrimitiveDescriptor::sphere(Vec3::ONE, 1, 1.));
        let old = binder.replace_program(HeadlessProgram::with_scene_interface(
            ProgramHandle(2),
            4,
        ));
        assert_eq!(old.handle(), ProgramHandle(1));
        assert_eq!(binder.cached_location_count(), 0);
        assert_eq!(binder.program().uniform("objects[0].type"), None);
    }

    #[test]
    fn frame_uniforms() {
        let mut binder = binder(1);
        let camera = CameraUniforms::new(Vec3::new(0., 1., 2.), Mat4::IDENTITY);
        binder.sync_frame(&camera);
        assert_eq!(
            binder.program().uniform("cam_pos"),
            Some(UniformValue::Vec3(Vec3::new(0., 1., 2.)))
        );
        assert_eq!(
            binder.program().uniform("view"),
            Some(UniformValue::Mat4(Mat4::IDENTITY))
        );
    }
}
