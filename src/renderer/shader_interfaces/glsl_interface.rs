//! GLSL declarations of the scene uniforms, generated from the same constants the host encodes
//! with. Prepend [`scene_declarations_glsl`] to the raymarching shader source so the array size,
//! type codes and field names can't drift from the host side.

use super::scene_uniforms::{
    object_uniform_name, primitive_type_codes, GlobalUniform, ObjectField, OBJECTS_ARRAY_NAME,
};
use std::fmt;

pub const OBJECT_STRUCT_NAME: &str = "Object";
pub const CAPACITY_DEFINE: &str = "MAX_OBJECTS";

/// Returns `#define`s for the capacity and type codes, the object struct and every uniform the
/// host writes.
pub fn scene_declarations_glsl(capacity: usize) -> String {
    SceneDeclarations { capacity }.to_string()
}

/// Formats as the GLSL text returned by [`scene_declarations_glsl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDeclarations {
    pub capacity: usize,
}

impl fmt::Display for SceneDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "#define {} {}", CAPACITY_DEFINE, self.capacity)?;
        writeln!(f, "#define SPHERE {}", primitive_type_codes::SPHERE)?;
        writeln!(f, "#define BOX {}", primitive_type_codes::BOX)?;
        writeln!(f, "#define TORUS {}", primitive_type_codes::TORUS)?;
        writeln!(f, "#define PLANE {}", primitive_type_codes::PLANE)?;
        writeln!(f)?;

        writeln!(f, "struct {} {{", OBJECT_STRUCT_NAME)?;
        for field in ObjectField::ALL {
            writeln!(f, "    {} {};", field.glsl_type(), field.name())?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(
            f,
            "uniform {} {}[{}];",
            OBJECT_STRUCT_NAME, OBJECTS_ARRAY_NAME, CAPACITY_DEFINE
        )?;
        for global in GlobalUniform::ALL {
            writeln!(f, "uniform {} {};", global.glsl_type(), global.name())?;
        }
        Ok(())
    }
}

/// Every uniform name declared by [`scene_declarations_glsl`] for the same `capacity`
pub fn declared_uniform_names(capacity: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(capacity * ObjectField::ALL.len() + GlobalUniform::ALL.len());
    for index in 0..capacity {
        names.extend(
            ObjectField::ALL
                .iter()
                .map(|&field| object_uniform_name(index, field)),
        );
    }
    names.extend(GlobalUniform::ALL.iter().map(|global| global.name().to_string()));
    names
}

// ~~ Tests ~~
