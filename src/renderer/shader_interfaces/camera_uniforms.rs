use super::scene_uniforms::{GlobalUniform, UniformValue};
use glam::{Mat4, Vec3};

/// Camera data read by the scene shader each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUniforms {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera-to-world transform i.e. the inverse of the view matrix
    pub view_inverse: Mat4,
}

impl CameraUniforms {
    #[inline]
    pub fn new(position: Vec3, view_inverse: Mat4) -> Self {
        Self {
            position,
            view_inverse,
        }
    }

    /// Builds the camera-to-world transform of a camera at `position` looking along `direction`
    pub fn looking_to(position: Vec3, direction: Vec3, up: Vec3) -> Self {
        let view = Mat4::look_to_rh(position, direction, up);
        Self::new(position, view.inverse())
    }

    pub fn encoded(&self) -> [(GlobalUniform, UniformValue); 2] {
        [
            (
                GlobalUniform::CameraPosition,
                UniformValue::Vec3(self.position),
            ),
            (GlobalUniform::View, UniformValue::Mat4(self.view_inverse)),
        ]
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::looking_to(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
    }
}

// ~~ Tests ~~
