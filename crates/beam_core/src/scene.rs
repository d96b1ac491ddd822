//! Scene container for the BEAM renderer.
//!
//! A scene is a list of triangle meshes attached in geometry-id order plus
//! two global color attribute arrays indexed by the ids an intersection
//! backend reports in its hit records. Scenes are built once, then treated
//! as read-only for the duration of every rendered frame.

use beam_math::Vec3;

use crate::mesh::TriangleMesh;

/// Color attribute arrays exposed to the shader.
///
/// Both arrays are scene-global: `face_colors` is indexed by the primitive
/// id of a hit and `vertex_colors` by vertex id. Geometries without
/// attribute buffers (the demo ground plane) simply contribute no entries;
/// their hits still resolve through the same arrays.
#[derive(Clone, Debug, Default)]
pub struct SceneAttributes {
    /// Per-triangle-face base color
    pub face_colors: Vec<Vec3>,

    /// Per-vertex base color
    pub vertex_colors: Vec<Vec3>,
}

/// A directional light, described by the direction the light travels.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Unit-length travel direction of the light
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a directional light travelling along `direction`.
    ///
    /// The direction is normalized on construction.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
        }
    }
}

/// A complete scene: geometry plus shading attributes.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    geometries: Vec<TriangleMesh>,
    attributes: SceneAttributes,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a mesh to the scene and return its geometry id.
    ///
    /// Ids are assigned in attachment order, matching the geometry ids an
    /// intersection backend built from this scene reports in hit records.
    pub fn attach_geometry(&mut self, mesh: TriangleMesh) -> u32 {
        let geom_id = self.geometries.len() as u32;
        log::debug!(
            "attached geometry {}: {} triangles, {} vertices",
            geom_id,
            mesh.triangle_count(),
            mesh.vertex_count()
        );
        self.geometries.push(mesh);
        geom_id
    }

    /// Set the per-face color array.
    pub fn set_face_colors(&mut self, colors: Vec<Vec3>) {
        self.attributes.face_colors = colors;
    }

    /// Set the per-vertex color array.
    pub fn set_vertex_colors(&mut self, colors: Vec<Vec3>) {
        self.attributes.vertex_colors = colors;
    }

    /// Get a geometry by id.
    pub fn geometry(&self, geom_id: u32) -> Option<&TriangleMesh> {
        self.geometries.get(geom_id as usize)
    }

    /// All geometries, in geometry-id order.
    pub fn geometries(&self) -> &[TriangleMesh] {
        &self.geometries
    }

    /// The shading attribute arrays.
    pub fn attributes(&self) -> &SceneAttributes {
        &self.attributes
    }

    /// Get geometry count.
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    /// Get total triangle count across all geometries.
    pub fn triangle_count(&self) -> usize {
        self.geometries.iter().map(|g| g.triangle_count()).sum()
    }
}
