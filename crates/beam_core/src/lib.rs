//! BEAM Core - Scene types for the tile renderer.
//!
//! This crate provides:
//!
//! - **Geometry**: `TriangleMesh`
//! - **Scene container**: `Scene` with its color attribute arrays
//! - **Lighting**: `DirectionalLight`
//! - **Demo content**: the colored cube / ground plane test scene

pub mod demo;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use mesh::TriangleMesh;
pub use scene::{DirectionalLight, Scene, SceneAttributes};
