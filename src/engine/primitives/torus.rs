use super::{primitive::EncodablePrimitive, primitive_kind::PrimitiveKind};
use crate::renderer::shader_interfaces::scene_uniforms::{ObjectField, UniformValue};
use glam::{Vec2, Vec3};

pub const DEFAULT_RADII: Vec2 = Vec2::new(0.5, 0.25);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub center: Vec3,
    /// x = major radius (center to tube center), y = minor radius (tube thickness)
    pub radii: Vec2,
}

impl Torus {
    pub const fn new(center: Vec3, radii: Vec2) -> Self {
        Self { center, radii }
    }

    #[inline]
    pub fn major_radius(&self) -> f32 {
        self.radii.x
    }

    #[inline]
    pub fn minor_radius(&self) -> f32 {
        self.radii.y
    }
}

impl EncodablePrimitive for Torus {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Torus
    }

    fn position(&self) -> Option<Vec3> {
        Some(self.center)
    }

    fn encoded_props(&self) -> (ObjectField, UniformValue) {
        (ObjectField::Torus, UniformValue::Vec2(self.radii))
    }
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radii: DEFAULT_RADII,
        }
    }
}
