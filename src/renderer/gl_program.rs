use super::{
    shader_interfaces::scene_uniforms::UniformValue,
    shader_program::{ProgramHandle, ShaderProgram},
};
use anyhow::ensure;
use glow::HasContext;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use std::rc::Rc;

/// [`ShaderProgram`] backed by a linked OpenGL program. Takes ownership of the program object and
/// deletes it when dropped.
pub struct GlProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
}

impl GlProgram {
    /// `program` must belong to `gl` and already be linked. The context must be current on the
    /// calling thread for the lifetime of this struct.
    pub fn new(gl: Rc<glow::Context>, program: glow::Program) -> anyhow::Result<Self> {
        let linked = unsafe { gl.get_program_link_status(program) };
        ensure!(
            linked,
            "gl program {} isn't linked: {}",
            program.0.get(),
            unsafe { gl.get_program_info_log(program) }
        );
        debug!("wrapping gl program {}", program.0.get());
        Ok(Self { gl, program })
    }
}

impl ShaderProgram for GlProgram {
    type Location = glow::UniformLocation;

    fn handle(&self) -> ProgramHandle {
        ProgramHandle(self.program.0.get())
    }

    fn use_program(&mut self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(self.program, name) }
    }

    fn write_uniform(&mut self, location: &glow::UniformLocation, value: UniformValue) {
        let location = Some(location);
        unsafe {
            match value {
                UniformValue::UInt(x) => self.gl.uniform_1_u32(location, x),
                // glUniform1i is the portable way to set a bool uniform
                UniformValue::Bool(x) => self.gl.uniform_1_i32(location, x as i32),
                UniformValue::Float(x) => self.gl.uniform_1_f32(location, x),
                UniformValue::Vec2(v) => self.gl.uniform_2_f32(location, v.x, v.y),
                UniformValue::Vec3(v) => self.gl.uniform_3_f32(location, v.x, v.y, v.z),
                UniformValue::Vec4(v) => self.gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
                UniformValue::Mat4(m) => {
                    self.gl
                        .uniform_matrix_4_f32_slice(location, false, &m.to_cols_array())
                }
            }
        }
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        debug!("deleting gl program {}", self.program.0.get());
        unsafe { self.gl.delete_program(self.program) };
    }
}
