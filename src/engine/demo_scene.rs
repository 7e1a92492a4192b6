use super::primitives::primitive::PrimitiveDescriptor;
use glam::{Vec2, Vec3, Vec4};

/// Starting scene: a sphere, a box and a torus above a ground plane
pub fn demo_scene() -> [PrimitiveDescriptor; 4] {
    [
        PrimitiveDescriptor::sphere(Vec3::new(3., 3., 0.), 1, 1.),
        PrimitiveDescriptor::cuboid(Vec3::new(1., 2., 5.), 2, Vec3::new(1., 2., 1.)),
        PrimitiveDescriptor::plane(3, Vec4::new(0., 1., 0., 1.)),
        PrimitiveDescriptor::torus(Vec3::new(-3., 5., 9.), 2, Vec2::new(0.5, 0.25)),
    ]
}

// ~~ Tests ~~

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config, engine::primitives::primitive_kind::PrimitiveKind};

    #[test]
    fn demo_scene_fits() {
        let scene = demo_scene();
        assert!(scene.len() <= config::SCENE_CAPACITY);
        let kinds: Vec<PrimitiveKind> = scene.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            [
                PrimitiveKind::Sphere,
                PrimitiveKind::Box,
                PrimitiveKind::Plane,
                PrimitiveKind::Torus
            ]
        );
    }
}
