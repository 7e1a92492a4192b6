use super::{
    shader_interfaces::{glsl_interface::declared_uniform_names, scene_uniforms::UniformValue},
    shader_program::{ProgramHandle, ShaderProgram},
};
use ahash::HashMap;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// In-memory [`ShaderProgram`] that stores uniform values instead of sending them to a GPU.
/// Used for headless runs and to inspect exactly what the binder writes.
#[derive(Debug, Clone)]
pub struct HeadlessProgram {
    handle: ProgramHandle,
    locations: HashMap<String, usize>,
    names: Vec<String>,
    values: Vec<Option<UniformValue>>,
    is_active: bool,
    use_count: usize,
    /// `None` unless [`HeadlessProgram::recording_writes`] was called
    write_log: Option<Vec<usize>>,
}

impl HeadlessProgram {
    /// Program declaring exactly `uniform_names`
    pub fn new(handle: ProgramHandle, uniform_names: impl IntoIterator<Item = String>) -> Self {
        let names: Vec<String> = uniform_names.into_iter().collect();
        let locations = names
            .iter()
            .enumerate()
            .map(|(location, name)| (name.clone(), location))
            .collect::<HashMap<String, usize>>();
        let values = vec![None; names.len()];
        Self {
            handle,
            locations,
            names,
            values,
            is_active: false,
            use_count: 0,
            write_log: None,
        }
    }

    /// Also remember the order of uniform writes, see [`HeadlessProgram::take_write_log`]
    pub fn recording_writes(mut self) -> Self {
        self.write_log = Some(Vec::new());
        self
    }

    /// Program declaring the scene interface generated for `capacity` slots
    pub fn with_scene_interface(handle: ProgramHandle, capacity: usize) -> Self {
        Self::new(handle, declared_uniform_names(capacity))
    }

    /// Last value written to `name`. `None` if it was never written or isn't declared.
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        let location = *self.locations.get(name)?;
        self.values[location]
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Simulates another system binding a different program
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Number of times this program was made active
    pub fn use_count(&self) -> usize {
        self.use_count
    }

    /// Names written since the last call, in write order. Always empty when the program isn't
    /// [recording writes](HeadlessProgram::recording_writes).
    pub fn take_write_log(&mut self) -> Vec<String> {
        let Some(write_log) = self.write_log.as_mut() else {
            return Vec::new();
        };
        std::mem::take(write_log)
            .into_iter()
            .map(|location| self.names[location].clone())
            .collect()
    }

    /// Every declared uniform with its current value, in declaration order
    pub fn snapshot(&self) -> Vec<(String, Option<UniformValue>)> {
        self.names
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect()
    }
}

impl ShaderProgram for HeadlessProgram {
    type Location = usize;

    fn handle(&self) -> ProgramHandle {
        self.handle
    }

    fn use_program(&mut self) {
        self.is_active = true;
        self.use_count += 1;
    }

    fn uniform_location(&self, name: &str) -> Option<usize> {
        self.locations.get(name).copied()
    }

    fn write_uniform(&mut self, location: &usize, value: UniformValue) {
        assert!(
            self.is_active,
            "uniform {} written while program {} isn't active",
            self.names[*location], self.handle
        );
        self.values[*location] = Some(value);
        if let Some(write_log) = self.write_log.as_mut() {
            write_log.push(*location);
        }
    }
}

// ~~ Tests ~~
