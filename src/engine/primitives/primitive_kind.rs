use crate::renderer::shader_interfaces::scene_uniforms::{primitive_type_codes, TypeCode};

/// [`PrimitiveKind::name`] returns one of these values
pub mod primitive_names {
    pub const SPHERE: &str = "Sphere";
    pub const BOX: &str = "Box";
    pub const TORUS: &str = "Torus";
    pub const PLANE: &str = "Plane";
}

static VARIANTS: &[PrimitiveKind] = &[
    PrimitiveKind::Sphere,
    PrimitiveKind::Box,
    PrimitiveKind::Torus,
    PrimitiveKind::Plane,
];

/// Shapes the scene shader knows how to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Box,
    Torus,
    Plane,
}

impl PrimitiveKind {
    pub fn variants() -> &'static [PrimitiveKind] {
        VARIANTS
    }

    /// Value written to `objects[i].type`.
    ///
    /// _Must match the type switch in the scene shader_
    pub const fn type_code(self) -> TypeCode {
        match self {
            Self::Sphere => primitive_type_codes::SPHERE,
            Self::Box => primitive_type_codes::BOX,
            Self::Torus => primitive_type_codes::TORUS,
            Self::Plane => primitive_type_codes::PLANE,
        }
    }

    pub fn from_type_code(type_code: TypeCode) -> Option<Self> {
        VARIANTS
            .iter()
            .copied()
            .find(|kind| kind.type_code() == type_code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sphere => primitive_names::SPHERE,
            Self::Box => primitive_names::BOX,
            Self::Torus => primitive_names::TORUS,
            Self::Plane => primitive_names::PLANE,
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ~~ Tests ~~
