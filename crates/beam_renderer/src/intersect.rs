//! Scene intersection capability and the built-in triangle backend.
//!
//! The renderer talks to intersection engines through the [`Intersector`]
//! trait: batched nearest-hit queries for primary rays, per-ray boolean
//! occlusion queries for shadow rays. [`TriangleScene`] is the built-in
//! backend, a committed copy of a scene's triangles tested with
//! Möller-Trumbore. Tests substitute scripted implementations.

use beam_core::Scene;
use beam_math::{Interval, Vec3};
use thiserror::Error;

use crate::ray::Ray;

/// Capability interface over an intersection engine.
///
/// Both queries are stateless with respect to the renderer: results depend
/// only on the committed scene and the ray, and no references to the batch
/// are retained beyond the call. Implementations must be safe to call
/// concurrently from independent tile tasks.
pub trait Intersector: Send + Sync {
    /// Resolve the nearest hit for every ray in the batch.
    ///
    /// Rays that intersect the scene get their `tfar`, normal,
    /// barycentrics, and primitive/geometry/instance ids overwritten in
    /// place; rays that miss keep the invalid geometry id.
    fn resolve_nearest(&self, rays: &mut [Ray]);

    /// Whether any geometry occludes the segment `[tnear, tfar]` along
    /// the ray. Does not populate hit attributes.
    fn resolve_occlusion(&self, ray: &Ray) -> bool;
}

/// Device-level failure while committing a scene.
///
/// These are fatal: callers report the error and terminate rather than
/// attempting a degraded render.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error(
        "geometry {geom_id}: triangle {prim_id} references vertex {index}, \
         mesh has {vertex_count} vertices"
    )]
    InvalidIndex {
        geom_id: u32,
        prim_id: u32,
        index: u32,
        vertex_count: u32,
    },

    #[error("geometry {geom_id}: index count {count} is not a multiple of 3")]
    TruncatedTriangles { geom_id: u32, count: usize },
}

struct TriangleHit {
    t: f32,
    u: f32,
    v: f32,
    /// Unnormalized geometric normal edge1 x edge2
    ng: Vec3,
}

/// Möller-Trumbore ray-triangle intersection.
fn intersect_triangle(
    org: Vec3,
    dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    ray_t: Interval,
) -> Option<TriangleHit> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < 1e-8 {
        return None;
    }

    let f = 1.0 / a;
    let s = org - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * dir.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if !ray_t.contains(t) {
        return None;
    }

    Some(TriangleHit {
        t,
        u,
        v,
        ng: edge1.cross(edge2),
    })
}

/// Committed triangle scene: the built-in [`Intersector`] backend.
///
/// Holds per-geometry flattened triangle lists in geometry-id order.
/// Building validates the meshes and copies their triangles, so the
/// source scene can change afterwards without affecting in-flight frames.
#[derive(Debug)]
pub struct TriangleScene {
    geometries: Vec<Vec<[Vec3; 3]>>,
}

impl TriangleScene {
    /// Validate and commit a scene for intersection queries.
    pub fn build(scene: &Scene) -> Result<Self, DeviceError> {
        let mut geometries = Vec::with_capacity(scene.geometry_count());

        for (geom_id, mesh) in scene.geometries().iter().enumerate() {
            let geom_id = geom_id as u32;

            if mesh.indices.len() % 3 != 0 {
                return Err(DeviceError::TruncatedTriangles {
                    geom_id,
                    count: mesh.indices.len(),
                });
            }

            let vertex_count = mesh.vertex_count() as u32;
            let mut triangles = Vec::with_capacity(mesh.triangle_count());

            for prim_id in 0..mesh.triangle_count() {
                for index in mesh.triangle_indices(prim_id) {
                    if index >= vertex_count {
                        return Err(DeviceError::InvalidIndex {
                            geom_id,
                            prim_id: prim_id as u32,
                            index,
                            vertex_count,
                        });
                    }
                }
                triangles.push(mesh.triangle(prim_id));
            }

            geometries.push(triangles);
        }

        log::info!(
            "committed scene: {} geometries, {} triangles",
            geometries.len(),
            geometries.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self { geometries })
    }

    /// Resolve the nearest hit for a single ray, in place.
    fn intersect_one(&self, ray: &mut Ray) {
        for (geom_id, triangles) in self.geometries.iter().enumerate() {
            for (prim_id, &[v0, v1, v2]) in triangles.iter().enumerate() {
                let ray_t = Interval::new(ray.tnear, ray.tfar);
                if let Some(hit) = intersect_triangle(ray.org, ray.dir, v0, v1, v2, ray_t) {
                    ray.tfar = hit.t;
                    ray.ng = hit.ng;
                    ray.u = hit.u;
                    ray.v = hit.v;
                    ray.prim_id = prim_id as u32;
                    ray.geom_id = geom_id as u32;
                }
            }
        }
    }
}

impl Intersector for TriangleScene {
    fn resolve_nearest(&self, rays: &mut [Ray]) {
        for ray in rays {
            self.intersect_one(ray);
        }
    }

    fn resolve_occlusion(&self, ray: &Ray) -> bool {
        let ray_t = Interval::new(ray.tnear, ray.tfar);
        for triangles in &self.geometries {
            for &[v0, v1, v2] in triangles {
                if intersect_triangle(ray.org, ray.dir, v0, v1, v2, ray_t).is_some() {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::{INVALID_ID, RAY_FAR};
    use beam_core::TriangleMesh;

    /// Triangle in the z = `z` plane covering the origin.
    fn facing_triangle(z: f32) -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, -1.0, z),
                Vec3::new(0.0, 1.0, z),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_nearest_hit_populates_record() {
        let mut scene = Scene::new();
        scene.attach_geometry(facing_triangle(-2.0));
        let device = TriangleScene::build(&scene).unwrap();

        let mut rays = [Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0, RAY_FAR, 0)];
        device.resolve_nearest(&mut rays);

        let ray = &rays[0];
        assert!(ray.is_hit());
        assert_eq!(ray.geom_id, 0);
        assert_eq!(ray.prim_id, 0);
        assert_eq!(ray.inst_id, INVALID_ID);
        assert!((ray.tfar - 2.0).abs() < 1e-5);
        // Geometric normal is unnormalized edge1 x edge2
        assert!(ray.ng.z > 0.0);
        assert!((ray.ng.length() - 1.0).abs() > 0.1);
    }

    #[test]
    fn test_miss_keeps_invalid_geom_id() {
        let mut scene = Scene::new();
        scene.attach_geometry(facing_triangle(-2.0));
        let device = TriangleScene::build(&scene).unwrap();

        let mut rays = [Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 0.0, RAY_FAR, 0)];
        device.resolve_nearest(&mut rays);

        assert!(!rays[0].is_hit());
        assert_eq!(rays[0].tfar, RAY_FAR);
    }

    #[test]
    fn test_nearest_wins_across_geometries() {
        let mut scene = Scene::new();
        scene.attach_geometry(facing_triangle(-4.0));
        scene.attach_geometry(facing_triangle(-1.5));
        let device = TriangleScene::build(&scene).unwrap();

        let mut rays = [Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0, RAY_FAR, 0)];
        device.resolve_nearest(&mut rays);

        assert_eq!(rays[0].geom_id, 1);
        assert!((rays[0].tfar - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_occlusion_reports_blockers() {
        let mut scene = Scene::new();
        scene.attach_geometry(facing_triangle(-2.0));
        let device = TriangleScene::build(&scene).unwrap();

        let blocked = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0, RAY_FAR, 0);
        assert!(device.resolve_occlusion(&blocked));

        let clear = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 0.0, RAY_FAR, 0);
        assert!(!device.resolve_occlusion(&clear));
    }

    #[test]
    fn test_shadow_bias_prevents_self_occlusion() {
        let mut scene = Scene::new();
        scene.attach_geometry(facing_triangle(0.0));
        let device = TriangleScene::build(&scene).unwrap();

        // Origin exactly on the triangle surface, leaving along +z: the
        // only intersection is at t = 0, below the bias.
        let shadow = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 0.001, RAY_FAR, 0);
        assert!(!device.resolve_occlusion(&shadow));
    }

    #[test]
    fn test_build_rejects_out_of_range_index() {
        let mut scene = Scene::new();
        scene.attach_geometry(TriangleMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 5],
        ));

        let err = TriangleScene::build(&scene).unwrap_err();
        assert_eq!(
            err,
            DeviceError::InvalidIndex {
                geom_id: 0,
                prim_id: 0,
                index: 5,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn test_build_rejects_truncated_index_buffer() {
        let mut scene = Scene::new();
        scene.attach_geometry(TriangleMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 2, 0],
        ));

        let err = TriangleScene::build(&scene).unwrap_err();
        assert_eq!(
            err,
            DeviceError::TruncatedTriangles {
                geom_id: 0,
                count: 4,
            }
        );
    }
}
