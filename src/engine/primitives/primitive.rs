use super::{
    cuboid::Cuboid, plane::Plane, primitive_kind::PrimitiveKind, sphere::Sphere, torus::Torus,
};
use crate::renderer::shader_interfaces::scene_uniforms::{ObjectField, UniformValue};
use glam::{Vec2, Vec3, Vec4};

/// Index of a material defined by the scene shader
pub type MaterialIndex = u32;

/// Implemented by every primitive payload so that the uniform encoder can be written once.
pub trait EncodablePrimitive {
    fn kind(&self) -> PrimitiveKind;

    /// World space position written to `objects[i].pos`. `None` means the shader struct's
    /// `pos` field is left untouched for this primitive.
    fn position(&self) -> Option<Vec3>;

    /// The kind specific shader field and its value.
    ///
    /// _Must match the field read by the scene shader for this primitive's type code_
    fn encoded_props(&self) -> (ObjectField, UniformValue);
}

/// Geometry payload. The variant is the kind tag, so a payload can never disagree with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Box(Cuboid),
    Torus(Torus),
    Plane(Plane),
}

impl Primitive {
    pub fn as_encodable(&self) -> &dyn EncodablePrimitive {
        match self {
            Self::Sphere(p) => p,
            Self::Box(p) => p,
            Self::Torus(p) => p,
            Self::Plane(p) => p,
        }
    }

    /// Default payload of the given kind, keeping `position` where the kind has one
    pub fn default_of_kind(kind: PrimitiveKind, position: Vec3) -> Self {
        match kind {
            PrimitiveKind::Sphere => Self::Sphere(Sphere {
                center: position,
                ..Default::default()
            }),
            PrimitiveKind::Box => Self::Box(Cuboid {
                center: position,
                ..Default::default()
            }),
            PrimitiveKind::Torus => Self::Torus(Torus {
                center: position,
                ..Default::default()
            }),
            PrimitiveKind::Plane => Self::Plane(Plane::default()),
        }
    }
}

impl EncodablePrimitive for Primitive {
    fn kind(&self) -> PrimitiveKind {
        self.as_encodable().kind()
    }

    fn position(&self) -> Option<Vec3> {
        self.as_encodable().position()
    }

    fn encoded_props(&self) -> (ObjectField, UniformValue) {
        self.as_encodable().encoded_props()
    }
}

impl From<Sphere> for Primitive {
    fn from(p: Sphere) -> Self {
        Self::Sphere(p)
    }
}
impl From<Cuboid> for Primitive {
    fn from(p: Cuboid) -> Self {
        Self::Box(p)
    }
}
impl From<Torus> for Primitive {
    fn from(p: Torus) -> Self {
        Self::Torus(p)
    }
}
impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

/// One entry of the scene table: a primitive and the material it's shaded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveDescriptor {
    pub material: MaterialIndex,
    pub primitive: Primitive,
}

impl PrimitiveDescriptor {
    pub fn new(material: MaterialIndex, primitive: impl Into<Primitive>) -> Self {
        Self {
            material,
            primitive: primitive.into(),
        }
    }

    pub fn sphere(center: Vec3, material: MaterialIndex, radius: f32) -> Self {
        Self::new(material, Sphere::new(center, radius))
    }

    /// `half_extents` is the distance from the center to each face
    pub fn cuboid(center: Vec3, material: MaterialIndex, half_extents: Vec3) -> Self {
        Self::new(material, Cuboid::new(center, half_extents))
    }

    /// `radii` = (major, minor)
    pub fn torus(center: Vec3, material: MaterialIndex, radii: Vec2) -> Self {
        Self::new(material, Torus::new(center, radii))
    }

    /// `normal_and_offset`: xyz = unit normal, w = signed offset from the origin
    pub fn plane(material: MaterialIndex, normal_and_offset: Vec4) -> Self {
        Self::new(material, Plane::from_vec4(normal_and_offset))
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.primitive.kind()
    }

    #[inline]
    pub fn position(&self) -> Option<Vec3> {
        self.primitive.position()
    }
}

// ~~ Tests ~~

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_matching_kind() {
        let sphere = PrimitiveDescriptor::sphere(Vec3::new(3., 3., 0.), 1, 1.);
        let cuboid = PrimitiveDescriptor::cuboid(Vec3::ZERO, 2, Vec3::ONE);
        let torus = PrimitiveDescriptor::torus(Vec3::ZERO, 2, Vec2::new(0.5, 0.25));
        let plane = PrimitiveDescriptor::plane(3, Vec4::new(0., 1., 0., 1.));

        assert_eq!(sphere.kind(), PrimitiveKind::Sphere);
        assert_eq!(cuboid.kind(), PrimitiveKind::Box);
        assert_eq!(torus.kind(), PrimitiveKind::Torus);
        assert_eq!(plane.kind(), PrimitiveKind::Plane);
    }

    #[test]
    fn plane_has_no_position() {
        let plane = PrimitiveDescriptor::plane(3, Vec4::new(0., 1., 0., 1.));
        assert_eq!(plane.position(), None);

        let sphere = PrimitiveDescriptor::sphere(Vec3::new(3., 3., 0.), 1, 1.);
        assert_eq!(sphere.position(), Some(Vec3::new(3., 3., 0.)));
    }

    #[test]
    fn payload_field_follows_kind() {
        let torus = PrimitiveDescriptor::torus(Vec3::ZERO, 0, Vec2::new(0.5, 0.25));
        assert_eq!(
            torus.primitive.encoded_props(),
            (ObjectField::Torus, UniformValue::Vec2(Vec2::new(0.5, 0.25)))
        );
    }

    #[test]
    fn default_of_kind_keeps_position() {
        let position = Vec3::new(1., 2., 3.);
        for &kind in PrimitiveKind::variants() {
            let primitive = Primitive::default_of_kind(kind, position);
            assert_eq!(primitive.kind(), kind);
            if kind != PrimitiveKind::Plane {
                assert_eq!(primitive.position(), Some(position));
            }
        }
    }
}
