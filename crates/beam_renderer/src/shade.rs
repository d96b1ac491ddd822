//! Shading of resolved rays.
//!
//! Flat face-color shading with one directional light and one hard
//! shadow ray per hit. Vertex colors travel with the scene attributes
//! but this policy only reads the face array.

use beam_core::{DirectionalLight, SceneAttributes};
use beam_math::Vec3;

use crate::intersect::Intersector;
use crate::ray::{Ray, RAY_FAR};

/// Minimum shadow-ray distance; keeps the hit surface from occluding
/// itself.
pub const SHADOW_BIAS: f32 = 0.001;

/// Shade a resolved ray, spawning one shadow ray through `device` if it
/// hit anything.
///
/// Misses shade to black. Hits get half the face color as base, plus the
/// full face color scaled by a clamped Lambert term when the path to the
/// light is clear. The geometric normal from the hit record is used, not
/// an interpolated shading normal.
pub fn shade(
    ray: &Ray,
    attributes: &SceneAttributes,
    light: DirectionalLight,
    device: &dyn Intersector,
) -> Vec3 {
    if !ray.is_hit() {
        return Vec3::ZERO;
    }

    let diffuse = attributes.face_colors[ray.prim_id as usize];
    let mut color = diffuse * 0.5;

    let shadow = Ray::new(ray.hit_point(), -light.direction, SHADOW_BIAS, RAY_FAR, 0);

    if !device.resolve_occlusion(&shadow) {
        let lambert = (-light.direction).dot(ray.ng.normalize()).clamp(0.0, 1.0);
        color += diffuse * lambert;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::INVALID_ID;

    struct ScriptedOcclusion(bool);

    impl Intersector for ScriptedOcclusion {
        fn resolve_nearest(&self, _rays: &mut [Ray]) {}

        fn resolve_occlusion(&self, ray: &Ray) -> bool {
            assert_eq!(ray.tnear, SHADOW_BIAS);
            self.0
        }
    }

    fn test_attributes() -> SceneAttributes {
        SceneAttributes {
            face_colors: vec![Vec3::new(0.2, 0.4, 0.8)],
            vertex_colors: Vec::new(),
        }
    }

    fn hit_ray() -> Ray {
        let mut ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 0.0, RAY_FAR, 0);
        ray.tfar = 3.0;
        ray.ng = Vec3::new(0.0, 2.0, 0.0); // unnormalized, straight up
        ray.prim_id = 0;
        ray.geom_id = 0;
        ray
    }

    fn test_light() -> DirectionalLight {
        DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_miss_shades_black() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X, 0.0, RAY_FAR, 0);
        assert_eq!(ray.geom_id, INVALID_ID);

        let color = shade(&ray, &test_attributes(), test_light(), &ScriptedOcclusion(false));
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_occluded_hit_gets_base_color_only() {
        let color = shade(
            &hit_ray(),
            &test_attributes(),
            test_light(),
            &ScriptedOcclusion(true),
        );
        assert_eq!(color, Vec3::new(0.2, 0.4, 0.8) * 0.5);
    }

    #[test]
    fn test_lit_hit_adds_lambert_term() {
        // Light straight down onto an upward normal: lambert = 1, so the
        // result is 1.5x the face color.
        let color = shade(
            &hit_ray(),
            &test_attributes(),
            test_light(),
            &ScriptedOcclusion(false),
        );

        let diffuse = Vec3::new(0.2, 0.4, 0.8);
        assert!((color - diffuse * 1.5).length() < 1e-6);
    }

    #[test]
    fn test_light_from_behind_contributes_nothing() {
        // Light travelling up, normal up: dot(-light, n) < 0 clamps to 0.
        let light = DirectionalLight::new(Vec3::new(0.0, 1.0, 0.0));
        let color = shade(&hit_ray(), &test_attributes(), light, &ScriptedOcclusion(false));
        assert_eq!(color, Vec3::new(0.2, 0.4, 0.8) * 0.5);
    }
}
