pub mod cuboid;
pub mod plane;
pub mod primitive;
pub mod primitive_kind;
pub mod sphere;
pub mod torus;
