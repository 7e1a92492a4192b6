use super::{primitive::EncodablePrimitive, primitive_kind::PrimitiveKind};
use crate::renderer::shader_interfaces::scene_uniforms::{ObjectField, UniformValue};
use glam::{Vec3, Vec4};

pub const DEFAULT_NORMAL: Vec3 = Vec3::Y;
pub const DEFAULT_OFFSET: f32 = 1.0;

/// Infinite plane. It has no position of its own: the offset along the normal places it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Expected to be unit length. Stored exactly as given.
    pub normal: Vec3,
    /// Signed distance from the world origin along `normal`
    pub offset: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// xyz = normal, w = offset. Same layout as the `normal` shader field.
    pub fn from_vec4(normal_and_offset: Vec4) -> Self {
        Self {
            normal: normal_and_offset.truncate(),
            offset: normal_and_offset.w,
        }
    }

    pub fn as_vec4(&self) -> Vec4 {
        self.normal.extend(self.offset)
    }
}

impl EncodablePrimitive for Plane {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Plane
    }

    fn position(&self) -> Option<Vec3> {
        None
    }

    fn encoded_props(&self) -> (ObjectField, UniformValue) {
        (ObjectField::Normal, UniformValue::Vec4(self.as_vec4()))
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: DEFAULT_NORMAL,
            offset: DEFAULT_OFFSET,
        }
    }
}

// ~~ Tests ~~
