//! Demo scene: a colored cube above a large ground plane.
//!
//! The classic smoke-test content for the renderer. The cube carries both
//! face and vertex color attributes; the ground plane attaches no
//! attribute buffers at all.

use beam_math::Vec3;

use crate::mesh::TriangleMesh;
use crate::scene::{DirectionalLight, Scene};

/// Build the triangulated unit cube (8 vertices, 12 triangles).
pub fn cube_mesh() -> TriangleMesh {
    let positions = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];

    #[rustfmt::skip]
    let indices = vec![
        // left side
        0, 1, 2,  1, 3, 2,
        // right side
        4, 6, 5,  5, 6, 7,
        // bottom side
        0, 4, 1,  1, 4, 5,
        // top side
        2, 3, 6,  3, 7, 6,
        // front side
        0, 2, 4,  2, 6, 4,
        // back side
        1, 5, 3,  3, 5, 7,
    ];

    TriangleMesh::new(positions, indices)
}

/// Per-face colors for the cube, two triangles per side.
pub fn cube_face_colors() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0), // left
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0), // right
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::splat(0.5), // bottom
        Vec3::splat(0.5),
        Vec3::splat(1.0), // top
        Vec3::splat(1.0),
        Vec3::new(0.0, 0.0, 1.0), // front
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0), // back
        Vec3::new(1.0, 1.0, 0.0),
    ]
}

/// Per-vertex colors for the cube, one per corner.
pub fn cube_vertex_colors() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
    ]
}

/// Build the ground plane (4 vertices, 2 triangles) at y = -2.
pub fn ground_plane_mesh() -> TriangleMesh {
    let positions = vec![
        Vec3::new(-10.0, -2.0, -10.0),
        Vec3::new(-10.0, -2.0, 10.0),
        Vec3::new(10.0, -2.0, -10.0),
        Vec3::new(10.0, -2.0, 10.0),
    ];
    let indices = vec![0, 1, 2, 1, 3, 2];

    TriangleMesh::new(positions, indices)
}

/// The demo light: directional, from upper-left behind the camera.
pub fn light() -> DirectionalLight {
    DirectionalLight::new(Vec3::new(1.0, -1.0, -1.0))
}

/// Assemble the full demo scene: cube first (geometry 0), then ground
/// plane (geometry 1), with the cube's attribute arrays installed.
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();

    scene.attach_geometry(cube_mesh());
    scene.attach_geometry(ground_plane_mesh());

    scene.set_face_colors(cube_face_colors());
    scene.set_vertex_colors(cube_vertex_colors());

    scene
}
