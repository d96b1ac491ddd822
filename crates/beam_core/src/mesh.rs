//! Triangle mesh representation for the BEAM scene graph.
//!
//! Meshes are indexed triangle lists, decoupled from any particular
//! intersection backend so the same geometry can be handed to a real
//! engine or to the built-in triangle intersector.

use beam_math::Vec3;

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the three vertex indices of triangle `prim`.
    pub fn triangle_indices(&self, prim: usize) -> [u32; 3] {
        [
            self.indices[prim * 3],
            self.indices[prim * 3 + 1],
            self.indices[prim * 3 + 2],
        ]
    }

    /// Get the three vertex positions of triangle `prim`.
    pub fn triangle(&self, prim: usize) -> [Vec3; 3] {
        let [i0, i1, i2] = self.triangle_indices(prim);
        [
            self.positions[i0 as usize],
            self.positions[i1 as usize],
            self.positions[i2 as usize],
        ]
    }
}
