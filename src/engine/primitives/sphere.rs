use super::{primitive::EncodablePrimitive, primitive_kind::PrimitiveKind};
use crate::renderer::shader_interfaces::scene_uniforms::{ObjectField, UniformValue};
use glam::Vec3;

pub const DEFAULT_RADIUS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl EncodablePrimitive for Sphere {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Sphere
    }

    fn position(&self) -> Option<Vec3> {
        Some(self.center)
    }

    fn encoded_props(&self) -> (ObjectField, UniformValue) {
        (ObjectField::Radius, UniformValue::Float(self.radius))
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: DEFAULT_RADIUS,
        }
    }
}
