use super::{primitive::EncodablePrimitive, primitive_kind::PrimitiveKind};
use crate::renderer::shader_interfaces::scene_uniforms::{ObjectField, UniformValue};
use glam::Vec3;

pub const DEFAULT_HALF_EXTENTS: Vec3 = Vec3::new(1., 2., 1.);

/// Box primitive. Encoded with the [`PrimitiveKind::Box`] type code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    /// Distance from the center to each face along x/y/z
    pub half_extents: Vec3,
}

impl Cuboid {
    pub const fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }
}

impl EncodablePrimitive for Cuboid {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Box
    }

    fn position(&self) -> Option<Vec3> {
        Some(self.center)
    }

    fn encoded_props(&self) -> (ObjectField, UniformValue) {
        (ObjectField::Size, UniformValue::Vec3(self.half_extents))
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            half_extents: DEFAULT_HALF_EXTENTS,
        }
    }
}
