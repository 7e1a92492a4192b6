use crate::engine::{
    primitives::primitive::{EncodablePrimitive, PrimitiveDescriptor},
    scene_table::SmoothingSettings,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Value written to `objects[i].type`
pub type TypeCode = u32;

#[rustfmt::skip]
pub mod primitive_type_codes {
    use super::TypeCode;
    pub const SPHERE: TypeCode = 0;
    pub const BOX: 	  TypeCode = 1;
    pub const TORUS:  TypeCode = 2;
    pub const PLANE:  TypeCode = 3;
}

/// Name of the uniform array of primitive structs.
///
/// _Must match the declaration in the scene shader_
pub const OBJECTS_ARRAY_NAME: &str = "objects";

/// Fields of the shader `Object` struct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectField {
    Type,
    Pos,
    Material,
    Radius,
    Size,
    Torus,
    Normal,
}

impl ObjectField {
    /// Declaration order of the shader struct
    pub const ALL: [ObjectField; 7] = [
        Self::Type,
        Self::Pos,
        Self::Material,
        Self::Radius,
        Self::Size,
        Self::Torus,
        Self::Normal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Pos => "pos",
            Self::Material => "material",
            Self::Radius => "radius",
            Self::Size => "size",
            Self::Torus => "torus",
            Self::Normal => "normal",
        }
    }

    /// GLSL type of the field
    pub const fn glsl_type(self) -> &'static str {
        match self {
            Self::Type | Self::Material => "uint",
            Self::Radius => "float",
            Self::Torus => "vec2",
            Self::Pos | Self::Size => "vec3",
            Self::Normal => "vec4",
        }
    }
}

/// Uniforms outside of the `objects` array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalUniform {
    ObjectCount,
    EnableSmoothing,
    Smoothing,
    CameraPosition,
    View,
}

impl GlobalUniform {
    pub const ALL: [GlobalUniform; 5] = [
        Self::ObjectCount,
        Self::EnableSmoothing,
        Self::Smoothing,
        Self::CameraPosition,
        Self::View,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ObjectCount => "nb_objects",
            Self::EnableSmoothing => "enable_smoothing",
            Self::Smoothing => "smoothing",
            Self::CameraPosition => "cam_pos",
            Self::View => "view",
        }
    }

    pub const fn glsl_type(self) -> &'static str {
        match self {
            Self::ObjectCount => "uint",
            Self::EnableSmoothing => "bool",
            Self::Smoothing => "float",
            Self::CameraPosition => "vec3",
            Self::View => "mat4",
        }
    }
}

/// A value that can be written to a single uniform location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    UInt(u32),
    Bool(bool),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    /// Column-major
    Mat4(Mat4),
}

/// Name of `field` in slot `index` of the objects array e.g. `objects[2].normal`
pub fn object_uniform_name(index: usize, field: ObjectField) -> String {
    format!("{}[{}].{}", OBJECTS_ARRAY_NAME, index, field.name())
}

/// Uniform writes for one slot. At most type, pos, material and a payload field.
pub type ObjectUniforms = Vec<(ObjectField, UniformValue)>;

/// Encodes a descriptor as the exact set of fields its kind owns. `type` always comes first.
/// Fields belonging to other kinds are never included.
pub fn encode_object(descriptor: &PrimitiveDescriptor) -> ObjectUniforms {
    let primitive = &descriptor.primitive;
    let mut encoded = Vec::with_capacity(4);
    encoded.push((
        ObjectField::Type,
        UniformValue::UInt(primitive.kind().type_code()),
    ));
    if let Some(position) = primitive.position() {
        encoded.push((ObjectField::Pos, UniformValue::Vec3(position)));
    }
    encoded.push((
        ObjectField::Material,
        UniformValue::UInt(descriptor.material),
    ));
    encoded.push(primitive.encoded_props());
    encoded
}

/// Encodes the live object count and smoothing parameters
pub fn encode_globals(
    object_count: usize,
    smoothing: &SmoothingSettings,
) -> [(GlobalUniform, UniformValue); 3] {
    [
        (
            GlobalUniform::ObjectCount,
            UniformValue::UInt(object_count as u32),
        ),
        (
            GlobalUniform::EnableSmoothing,
            UniformValue::Bool(smoothing.enabled),
        ),
        (
            GlobalUniform::Smoothing,
            UniformValue::Float(smoothing.factor),
        ),
    ]
}

// ~~ Tests ~~
